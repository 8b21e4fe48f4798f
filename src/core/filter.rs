use crate::models::selector::{DayFilter, MonthFilter};
use crate::models::trip::{Trip, TripTable};
use std::fmt;
use tracing::debug;

/// Month + weekday selection applied to a loaded table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripFilter {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl TripFilter {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    pub fn is_all(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.matches(trip.month) && self.day.matches(trip.day_of_week)
    }

    /// Rows of `table` matching both selectors, original order kept.
    pub fn apply(&self, table: &TripTable) -> TripTable {
        if self.is_all() {
            return table.clone();
        }

        let filtered = table.select(|t| self.matches(t));
        debug!(
            month = %self.month,
            day = %self.day,
            before = table.len(),
            after = filtered.len(),
            "filter applied"
        );
        filtered
    }
}

impl fmt::Display for TripFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month: {}, day: {}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    /// One trip every 29 hours through the first half of 2017, so every
    /// month, weekday and hour shows up.
    fn sample_table() -> TripTable {
        let start = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap();

        let trips = (0..150)
            .map(|i| {
                Trip::new(
                    i,
                    start + Duration::hours(29 * i as i64),
                    format!("S{}", i % 4),
                    format!("E{}", i % 3),
                    60.0 * (i + 1) as f64,
                )
            })
            .collect();

        TripTable {
            headers: vec!["Start Time".into()],
            trips,
            has_gender: false,
            has_birth_year: false,
        }
    }

    fn all_selectors() -> Vec<TripFilter> {
        let months = std::iter::once(MonthFilter::All).chain((1..=12).map(MonthFilter::Month));
        months
            .flat_map(|m| {
                std::iter::once(DayFilter::All)
                    .chain((0..7).map(DayFilter::Day))
                    .map(move |d| TripFilter::new(m, d))
            })
            .collect()
    }

    #[test]
    fn all_all_returns_the_table_unchanged() {
        let table = sample_table();
        let out = TripFilter::default().apply(&table);
        assert_eq!(out, table);
    }

    #[test]
    fn filtered_rows_are_a_matching_subset() {
        let table = sample_table();

        for f in all_selectors() {
            let out = f.apply(&table);
            assert!(out.len() <= table.len());
            for trip in &out {
                assert!(f.month.matches(trip.month), "{f}");
                assert!(f.day.matches(trip.day_of_week), "{f}");
                assert!(table.trips.contains(trip));
            }
            let expected = table.iter().filter(|t| f.matches(t)).count();
            assert_eq!(out.len(), expected, "{f}");
        }
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let table = sample_table();

        for f in all_selectors() {
            let once = f.apply(&table);
            let twice = f.apply(&once);
            assert_eq!(once, twice, "{f}");
        }
    }

    #[test]
    fn preserves_order_and_derived_fields() {
        let table = sample_table();
        let f = TripFilter::new(MonthFilter::Month(2), DayFilter::Day(0));
        let out = f.apply(&table);

        assert!(!out.is_empty());
        assert!(out.trips.windows(2).all(|w| w[0].index < w[1].index));
        for trip in &out {
            assert_eq!(trip, &table.trips[trip.index]);
        }
    }

    #[test]
    fn month_without_trips_gives_empty_table() {
        let table = sample_table();
        let out = TripFilter::new(MonthFilter::Month(11), DayFilter::All).apply(&table);
        assert!(out.is_empty());
        assert_eq!(out.headers, table.headers);
    }
}
