//! Descriptive statistics over a (filtered) trip table.
//!
//! Every statistic that needs at least one value is an `Option`: `None` means
//! "no data" and is rendered as such, it never aborts the other statistics.

use crate::models::trip::TripTable;
use serde::Serialize;
use std::collections::BTreeMap;

/// Most frequent value. On ties the smallest value (natural order) wins.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        // strict > keeps the first (smallest) value among equal counts
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best.map(|(v, _)| v)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Frequency of each distinct value, most frequent first (ties by value).
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }

    let mut out: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    // stable sort: equal counts stay in ascending value order
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

// ---------------------------
// Most frequent times of travel
// ---------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// 1..=12
    pub month: Option<u32>,
    /// 0..=6, monday = 0
    pub day_of_week: Option<u32>,
    pub hour: Option<u32>,
}

impl TimeStats {
    pub fn compute(table: &TripTable) -> Self {
        Self {
            month: mode(table.iter().map(|t| t.month)),
            day_of_week: mode(table.iter().map(|t| t.day_of_week)),
            hour: mode(table.iter().map(|t| t.hour)),
        }
    }
}

// ---------------------------
// Most popular stations and trip
// ---------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub route: Option<String>,
}

impl StationStats {
    /// Blank station cells are missing values: they never win a mode and a
    /// trip only has a route when both ends are known.
    pub fn compute(table: &TripTable) -> Self {
        let known = |s: &str| !s.is_empty();

        Self {
            start_station: mode(
                table
                    .iter()
                    .map(|t| t.start_station.as_str())
                    .filter(|s| known(s)),
            )
            .map(str::to_string),
            end_station: mode(
                table
                    .iter()
                    .map(|t| t.end_station.as_str())
                    .filter(|s| known(s)),
            )
            .map(str::to_string),
            route: mode(
                table
                    .iter()
                    .filter(|t| known(&t.start_station) && known(&t.end_station))
                    .map(|t| t.route()),
            ),
        }
    }
}

// ---------------------------
// Trip duration
// ---------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    pub total_hours: f64,
    pub mean_seconds: Option<f64>,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Self {
        let durations: Vec<f64> = table.iter().map(|t| t.duration_secs).collect();
        let total_seconds: f64 = durations.iter().sum();

        Self {
            trips: durations.len(),
            total_seconds,
            total_hours: total_seconds / 3600.0,
            mean_seconds: mean(&durations),
        }
    }
}

// ---------------------------
// Users
// ---------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<ValueCount>,
    /// `None` when the table has no gender column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders: Option<Vec<ValueCount>>,
    /// `None` when the table has no birth year column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(table: &TripTable) -> Self {
        let user_types = value_counts(table.iter().filter_map(|t| t.user_type.as_deref()));

        let genders = table
            .has_gender
            .then(|| value_counts(table.iter().filter_map(|t| t.gender.as_deref())));

        let birth_year = table.has_birth_year.then(|| {
            let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year).collect();
            BirthYearStats {
                earliest: years.iter().min().copied(),
                most_recent: years.iter().max().copied(),
                most_common: mode(years.iter().copied()),
            }
        });

        Self {
            user_types,
            genders,
            birth_year,
        }
    }
}

/// The four statistic groups of one report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}

impl Summary {
    pub fn compute(table: &TripTable) -> Self {
        Self {
            time: TimeStats::compute(table),
            stations: StationStats::compute(table),
            durations: DurationStats::compute(table),
            users: UserStats::compute(table),
        }
    }
}
