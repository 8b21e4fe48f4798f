use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// City → (display name, data file). Order is the order shown to the user.
static CITY_DATA: [(City, &str, &str); 3] = [
    (City::Chicago, "chicago", "chicago.csv"),
    (City::NewYorkCity, "new york city", "new_york_city.csv"),
    (City::Washington, "washington", "washington.csv"),
];

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    fn entry(&self) -> &'static (City, &'static str, &'static str) {
        // every variant has exactly one row in CITY_DATA
        match self {
            City::Chicago => &CITY_DATA[0],
            City::NewYorkCity => &CITY_DATA[1],
            City::Washington => &CITY_DATA[2],
        }
    }

    pub fn name(&self) -> &'static str {
        self.entry().1
    }

    pub fn file_name(&self) -> &'static str {
        self.entry().2
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    /// Helper: convert user input (any case, `_` or `-` accepted in place of spaces)
    pub fn from_input(input: &str) -> Option<Self> {
        let normalized = input
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ");

        CITY_DATA
            .iter()
            .find(|(_, name, _)| *name == normalized)
            .map(|(city, _, _)| *city)
    }

    /// Comma separated list of accepted names, used in prompts and errors.
    pub fn choices() -> String {
        CITY_DATA
            .iter()
            .map(|(_, name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::from_input(s).ok_or_else(|| {
            AppError::InvalidCity(format!("'{s}' (expected one of: {})", City::choices()))
        })
    }
}
