//! Month and weekday selectors.
//!
//! A selector is either a concrete month/day or `all`. Month indices are
//! 1-based (january = 1), weekday indices are 0-based with monday = 0, which
//! is also how the loader derives them from the start timestamp.

use crate::errors::AppError;
use std::fmt;
use std::str::FromStr;

pub const ALL: &str = "all";

pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Name of a 1-based month index.
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(idx).copied()
}

/// Name of a 0-based (monday first) weekday index.
pub fn day_name(day: u32) -> Option<&'static str> {
    DAYS.get(usize::try_from(day).ok()?).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    /// 1..=12
    Month(u32),
}

impl MonthFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim().to_lowercase();
        if s == ALL {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == s)
            .map(|idx| MonthFilter::Month(idx as u32 + 1))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MonthFilter::All => ALL,
            MonthFilter::Month(m) => month_name(*m).unwrap_or("?"),
        }
    }

    pub fn choices() -> String {
        format!("{}, {ALL}", MONTHS.join(", "))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MonthFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonthFilter::from_input(s).ok_or_else(|| {
            AppError::InvalidMonth(format!("'{s}' (expected one of: {})", MonthFilter::choices()))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    /// 0..=6, monday = 0
    Day(u32),
}

impl DayFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim().to_lowercase();
        if s == ALL {
            return Some(DayFilter::All);
        }
        DAYS.iter()
            .position(|d| *d == s)
            .map(|idx| DayFilter::Day(idx as u32))
    }

    pub fn matches(&self, day_of_week: u32) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == day_of_week,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayFilter::All => ALL,
            DayFilter::Day(d) => day_name(*d).unwrap_or("?"),
        }
    }

    pub fn choices() -> String {
        format!("{}, {ALL}", DAYS.join(", "))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayFilter::from_input(s).ok_or_else(|| {
            AppError::InvalidDay(format!("'{s}' (expected one of: {})", DayFilter::choices()))
        })
    }
}
