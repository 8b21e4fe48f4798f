//! Interactive exploration loop: city/month/day prompts, statistics, raw
//! rows on request, restart.

use crate::cli::prompt::{ask, ask_yes_no, read_answer};
use crate::config::Config;
use crate::core::filter::TripFilter;
use crate::core::loader::load_city;
use crate::core::pager::Pager;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::models::selector::{DayFilter, MonthFilter};
use crate::models::trip::TripTable;
use crate::report::ReportContext;
use crate::report::text::{write_context, write_rows, write_summary};
use crate::ui::messages;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// input ended, leave without asking anything else
    Quit,
}

pub struct Session<'a, R, W> {
    input: R,
    output: W,
    cfg: &'a Config,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, cfg: &'a Config) -> Self {
        Self { input, output, cfg }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        loop {
            if self.cycle()? == Flow::Quit {
                break;
            }

            let answer = read_answer(
                &mut self.input,
                &mut self.output,
                "\nWould you like to restart? Enter yes or no.\n",
            )?;
            match answer {
                Some(a) if a.eq_ignore_ascii_case("yes") => debug!("restarting session"),
                _ => break,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn ask_selection(&mut self) -> AppResult<Option<(City, TripFilter)>> {
        let (input, output) = (&mut self.input, &mut self.output);

        let question = format!("Select a city from {} to analyze: ", City::choices());
        let Some(city) = ask(input, output, &question, City::from_input)? else {
            return Ok(None);
        };

        let question = format!("Select a month from {} to analyze: ", MonthFilter::choices());
        let Some(month) = ask(input, output, &question, MonthFilter::from_input)? else {
            return Ok(None);
        };

        let question = format!("Select a day from {} to analyze: ", DayFilter::choices());
        let Some(day) = ask(input, output, &question, DayFilter::from_input)? else {
            return Ok(None);
        };

        Ok(Some((city, TripFilter::new(month, day))))
    }

    /// One pass: prompts, load, filter, statistics, raw rows.
    fn cycle(&mut self) -> AppResult<Flow> {
        let Some((city, filter)) = self.ask_selection()? else {
            return Ok(Flow::Quit);
        };
        writeln!(self.output, "{}", self.cfg.separator())?;

        let table = match load_city(city, &self.cfg.data_path()) {
            Ok(table) => table,
            Err(e) => {
                warn!(city = %city, error = %e, "loading failed");
                messages::error(&e);
                return Ok(Flow::Continue);
            }
        };

        let filtered = filter.apply(&table);
        let ctx = ReportContext {
            city,
            filter,
            loaded: table.len(),
            matched: filtered.len(),
        };
        drop(table);

        write_context(&mut self.output, &ctx)?;
        write_summary(&mut self.output, &filtered, &self.cfg.separator())?;

        self.browse_rows(&filtered)
    }

    fn browse_rows(&mut self, table: &TripTable) -> AppResult<Flow> {
        let page = self.cfg.rows_per_page;
        let question =
            format!("Do you want to see the first {page} lines of the data? ('yes' or 'no'): ");
        match ask_yes_no(&mut self.input, &mut self.output, &question)? {
            None => return Ok(Flow::Quit),
            Some(false) => return Ok(Flow::Continue),
            Some(true) => {}
        }

        if table.is_empty() {
            writeln!(self.output, "No rows to display.")?;
            return Ok(Flow::Continue);
        }

        let mut pager = Pager::new(table.len(), page);
        let question = format!("Do you want to see the next {page} lines? ('yes' or 'no'): ");

        while let Some(window) = pager.next() {
            writeln!(self.output)?;
            write_rows(&mut self.output, table, window)?;

            if !pager.has_more() {
                writeln!(self.output, "\nNo more rows to display.")?;
                break;
            }

            match ask_yes_no(&mut self.input, &mut self.output, &question)? {
                None => return Ok(Flow::Quit),
                Some(false) => break,
                Some(true) => {}
            }
        }

        Ok(Flow::Continue)
    }
}
