//! Human readable report sections.

use super::{NO_DATA, ReportContext};
use crate::core::stats::{
    DurationStats, StationStats, Summary, TimeStats, UserStats, ValueCount,
};
use crate::models::selector::{day_name, month_name};
use crate::models::trip::TripTable;
use crate::utils::formatting::{secs2readable, title_case};
use crate::utils::table::{Table, pad_right};
use crate::utils::time::{format_elapsed, timed};
use std::fmt::Display;
use std::io::{self, Write};
use std::ops::Range;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

fn or_no_data<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NO_DATA.to_string())
}

pub fn write_context<W: Write>(out: &mut W, ctx: &ReportContext) -> io::Result<()> {
    writeln!(
        out,
        "{} ({}): {} of {} trips selected.",
        title_case(ctx.city.name()),
        ctx.filter,
        ctx.matched,
        ctx.loaded
    )
}

/// Title, body, elapsed time and separator of one statistic group.
fn write_section<W, F>(
    out: &mut W,
    title: &str,
    elapsed: Duration,
    separator: &str,
    body: F,
) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    writeln!(out, "\n{title}\n")?;
    body(out)?;
    writeln!(out, "\nThis took {}.", format_elapsed(elapsed))?;
    writeln!(out, "{separator}")
}

pub fn write_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> io::Result<()> {
    writeln!(
        out,
        "Most common month: {}",
        or_no_data(stats.month.and_then(month_name))
    )?;
    writeln!(
        out,
        "Most common day of week: {}",
        or_no_data(stats.day_of_week.and_then(day_name))
    )?;
    writeln!(out, "Most common start hour: {}", or_no_data(stats.hour))
}

pub fn write_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    writeln!(
        out,
        "Most common start station: {}",
        or_no_data(stats.start_station.as_deref())
    )?;
    writeln!(
        out,
        "Most common end station: {}",
        or_no_data(stats.end_station.as_deref())
    )?;
    writeln!(
        out,
        "Most common combination of start station and end station: {}",
        or_no_data(stats.route.as_deref())
    )
}

pub fn write_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> io::Result<()> {
    writeln!(out, "Trips: {}", stats.trips)?;
    writeln!(
        out,
        "Total travel time: {:.2} hours ({})",
        stats.total_hours,
        secs2readable(stats.total_seconds)
    )?;
    match stats.mean_seconds {
        Some(mean) => writeln!(
            out,
            "Mean travel time: {:.2} seconds ({})",
            mean,
            secs2readable(mean)
        ),
        None => writeln!(out, "Mean travel time: {NO_DATA}"),
    }
}

fn write_counts<W: Write>(out: &mut W, label: &str, counts: &[ValueCount]) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "{label}: {NO_DATA}");
    }

    writeln!(out, "{label}:")?;
    let width = counts
        .iter()
        .map(|c| UnicodeWidthStr::width(c.value.as_str()))
        .max()
        .unwrap_or(0);
    for c in counts {
        writeln!(out, "  {}  {}", pad_right(&c.value, width), c.count)?;
    }
    Ok(())
}

pub fn write_user_stats<W: Write>(out: &mut W, stats: &UserStats) -> io::Result<()> {
    write_counts(out, "Count of user types", &stats.user_types)?;

    if let Some(genders) = &stats.genders {
        write_counts(out, "Count of gender", genders)?;
    }

    if let Some(by) = &stats.birth_year {
        writeln!(out, "Earliest year of birth: {}", or_no_data(by.earliest))?;
        writeln!(out, "Most recent year of birth: {}", or_no_data(by.most_recent))?;
        writeln!(out, "Most common year of birth: {}", or_no_data(by.most_common))?;
    }
    Ok(())
}

/// Compute and print the four statistic groups, each timed on its own.
pub fn write_summary<W: Write>(
    out: &mut W,
    table: &TripTable,
    separator: &str,
) -> io::Result<Summary> {
    let (time, elapsed) = timed(|| TimeStats::compute(table));
    write_section(
        out,
        "Calculating The Most Frequent Times of Travel...",
        elapsed,
        separator,
        |o| write_time_stats(o, &time),
    )?;

    let (stations, elapsed) = timed(|| StationStats::compute(table));
    write_section(
        out,
        "Calculating The Most Popular Stations and Trip...",
        elapsed,
        separator,
        |o| write_station_stats(o, &stations),
    )?;

    let (durations, elapsed) = timed(|| DurationStats::compute(table));
    write_section(
        out,
        "Calculating Trip Duration...",
        elapsed,
        separator,
        |o| write_duration_stats(o, &durations),
    )?;

    let (users, elapsed) = timed(|| UserStats::compute(table));
    write_section(out, "Calculating User Stats...", elapsed, separator, |o| {
        write_user_stats(o, &users)
    })?;

    Ok(Summary {
        time,
        stations,
        durations,
        users,
    })
}

/// Print the rows in `range` (clamped to the table) with their source index.
pub fn write_rows<W: Write>(out: &mut W, table: &TripTable, range: Range<usize>) -> io::Result<()> {
    let end = range.end.min(table.len());
    let start = range.start.min(end);

    let mut t = Table::new(std::iter::once("#".to_string()).chain(table.display_headers()));
    for trip in &table.trips[start..end] {
        let mut row = vec![trip.index.to_string()];
        row.extend(TripTable::display_row(trip));
        t.add_row(row);
    }
    write!(out, "{}", t.render())
}
