//! Dataset loader: reads a city's CSV file into a [`TripTable`].

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::trip::{Trip, TripTable};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const COL_START_TIME: &str = "Start Time";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_DURATION: &str = "Trip Duration";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Positions of the known columns inside the header row.
struct Columns {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, String> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| format!("missing column '{name}'"));

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            duration: require(COL_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }
}

/// Empty cells are missing values.
fn optional_field(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_record(cols: &Columns, record: &StringRecord, index: usize) -> Result<Trip, String> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let start_time = parse_timestamp(field(cols.start_time)).ok_or_else(|| {
        format!(
            "line {line}: invalid {COL_START_TIME} '{}'",
            field(cols.start_time)
        )
    })?;

    let duration_secs = field(cols.duration)
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| {
            format!(
                "line {line}: invalid {COL_DURATION} '{}'",
                field(cols.duration)
            )
        })?;

    // birth years are written as floats ("1989.0") in some files
    let birth_year = match cols.birth_year.and_then(|idx| optional_field(record, idx)) {
        Some(v) => {
            let year = v
                .parse::<f64>()
                .ok()
                .filter(|y| y.is_finite())
                .ok_or_else(|| format!("line {line}: invalid {COL_BIRTH_YEAR} '{v}'"))?;
            Some(year.round() as i32)
        }
        None => None,
    };

    Ok(Trip::new(
        index,
        start_time,
        field(cols.start_station),
        field(cols.end_station),
        duration_secs,
    )
    .with_user_type(optional_field(record, cols.user_type))
    .with_gender(cols.gender.and_then(|idx| optional_field(record, idx)))
    .with_birth_year(birth_year)
    .with_raw(record.iter().map(str::to_string).collect()))
}

/// Read trips from any CSV source. `source` is only used in error messages.
pub fn read_trips<R: Read>(reader: R, source: &Path) -> AppResult<TripTable> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::data_access(source, e))?
        .clone();
    let cols = Columns::resolve(&headers).map_err(|e| AppError::data_access(source, e))?;

    let mut trips = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| AppError::data_access(source, e))?;
        let trip = parse_record(&cols, &record, index)
            .map_err(|e| AppError::data_access(source, e))?;
        trips.push(trip);
    }

    Ok(TripTable {
        headers: headers.iter().map(str::to_string).collect(),
        trips,
        has_gender: cols.gender.is_some(),
        has_birth_year: cols.birth_year.is_some(),
    })
}

/// Load the trip file of `city` from `data_dir`.
pub fn load_city(city: City, data_dir: &Path) -> AppResult<TripTable> {
    let path = city.data_path(data_dir);
    debug!(city = %city, path = %path.display(), "loading trip data");

    if !path.is_file() {
        return Err(AppError::data_access(&path, "file not found"));
    }

    let file = File::open(&path).map_err(|e| AppError::data_access(&path, e))?;
    let table = read_trips(file, &path)?;

    info!(
        city = %city,
        rows = table.len(),
        gender = table.has_gender,
        birth_year = table.has_birth_year,
        "trip table loaded"
    );
    Ok(table)
}
