use super::ReportContext;
use crate::core::stats::{DurationStats, StationStats, Summary, UserStats};
use crate::errors::AppResult;
use crate::models::selector::{day_name, month_name};
use crate::models::trip::TripTable;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
struct TimeView {
    month: Option<&'static str>,
    day_of_week: Option<&'static str>,
    hour: Option<u32>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    city: &'static str,
    month: &'static str,
    day: &'static str,
    trips_loaded: usize,
    trips_selected: usize,
    time: TimeView,
    stations: &'a StationStats,
    durations: &'a DurationStats,
    users: &'a UserStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<Map<String, Value>>>,
}

/// One object per trip, keyed by column name.
fn rows_as_objects(table: &TripTable) -> Vec<Map<String, Value>> {
    let headers = table.display_headers();
    table
        .iter()
        .map(|trip| {
            headers
                .iter()
                .cloned()
                .zip(TripTable::display_row(trip).into_iter().map(Value::String))
                .collect()
        })
        .collect()
}

/// Pretty printed JSON document with the context, the four statistic
/// groups and, when `table` is given, every selected row.
pub fn render(
    ctx: &ReportContext,
    summary: &Summary,
    table: Option<&TripTable>,
) -> AppResult<String> {
    let report = JsonReport {
        city: ctx.city.name(),
        month: ctx.filter.month.label(),
        day: ctx.filter.day.label(),
        trips_loaded: ctx.loaded,
        trips_selected: ctx.matched,
        time: TimeView {
            month: summary.time.month.and_then(month_name),
            day_of_week: summary.time.day_of_week.and_then(day_name),
            hour: summary.time.hour,
        },
        stations: &summary.stations,
        durations: &summary.durations,
        users: &summary.users,
        rows: table.map(rows_as_objects),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
