use chrono::{Datelike, NaiveDateTime, Timelike};

/// One row of a city's trip file.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// 0-based position of the record in the source file
    pub index: usize,
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time
    pub month: u32,
    pub day_of_week: u32,
    pub hour: u32,

    /// Original CSV fields, in header order
    pub raw: Vec<String>,
}

impl Trip {
    pub fn new(
        index: usize,
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            index,
            start_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            duration_secs,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            raw: Vec::new(),
        }
    }

    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    pub fn with_raw(mut self, raw: Vec<String>) -> Self {
        self.raw = raw;
        self
    }

    /// "start, end" combination used for the most popular trip.
    pub fn route(&self) -> String {
        format!("{}, {}", self.start_station, self.end_station)
    }
}

/// All trips of one city, plus the header row they were read with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub headers: Vec<String>,
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

pub const DERIVED_COLUMNS: [&str; 3] = ["month", "day_of_week", "hour"];

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Same columns, only the trips accepted by `keep`, in the original order.
    pub fn select<F>(&self, mut keep: F) -> TripTable
    where
        F: FnMut(&Trip) -> bool,
    {
        TripTable {
            headers: self.headers.clone(),
            trips: self.trips.iter().filter(|t| keep(t)).cloned().collect(),
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }

    /// Original headers followed by the derived columns.
    pub fn display_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .cloned()
            .chain(DERIVED_COLUMNS.iter().map(|c| c.to_string()))
            .collect()
    }

    pub fn display_row(trip: &Trip) -> Vec<String> {
        let mut row = trip.raw.clone();
        row.push(trip.month.to_string());
        row.push(trip.day_of_week.to_string());
        row.push(trip.hour.to_string());
        row
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
