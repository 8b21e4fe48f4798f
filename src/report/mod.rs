//! Report stage: renders statistics and raw rows.

pub mod json;
pub mod text;

use crate::core::filter::TripFilter;
use crate::models::city::City;
use clap::ValueEnum;

pub const NO_DATA: &str = "no data";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

/// What the statistics were computed over.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext {
    pub city: City,
    pub filter: TripFilter,
    /// rows in the table before filtering
    pub loaded: usize,
    /// rows left after filtering
    pub matched: usize,
}
