use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::TripFilter;
use crate::core::loader::load_city;
use crate::core::stats::Summary;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::report::text::{write_context, write_rows, write_summary};
use crate::report::{ReportContext, ReportFormat, json};
use std::io::{self, Write};
use tracing::debug;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        city,
        month,
        day,
        format,
        raw,
    } = cmd
    {
        let mut out = io::stdout().lock();
        write_report(
            &mut out,
            cfg,
            *city,
            TripFilter::new(*month, *day),
            *format,
            *raw,
        )?;
    }
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    cfg: &Config,
    city: City,
    filter: TripFilter,
    format: ReportFormat,
    raw: bool,
) -> AppResult<()> {
    let table = load_city(city, &cfg.data_path())?;
    let filtered = filter.apply(&table);
    let ctx = ReportContext {
        city,
        filter,
        loaded: table.len(),
        matched: filtered.len(),
    };
    drop(table);
    debug!(format = format.as_str(), raw, "writing report");

    match format {
        ReportFormat::Text => {
            write_context(out, &ctx)?;
            write_summary(out, &filtered, &cfg.separator())?;
            if raw {
                writeln!(out)?;
                write_rows(out, &filtered, 0..filtered.len())?;
            }
        }
        ReportFormat::Json => {
            let summary = Summary::compute(&filtered);
            let doc = json::render(&ctx, &summary, raw.then_some(&filtered))?;
            writeln!(out, "{doc}")?;
        }
    }

    Ok(())
}
