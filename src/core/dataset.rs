use crate::core::catalog::CityCatalog;
use crate::core::models::{Trip, TripRecord};
use crate::core::types::{City, DayOfWeek, Filter, FilterSelection, Month};
use crate::errors::{Error, Result};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Optional columns that only some cities publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionalColumns {
    pub gender: bool,
    pub birth_year: bool,
}

/// Header positions of the columns the loader reads.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    start_time: usize,
    end_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord, source: &str) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| {
            find(name).ok_or_else(|| Error::MissingColumn {
                column: name,
                file: source.to_string(),
            })
        };
        Ok(Self {
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            trip_duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn optional_columns(&self) -> OptionalColumns {
        OptionalColumns {
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }

    fn parse_record(&self, row: usize, record: &StringRecord) -> Result<TripRecord> {
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();
        let present = |idx: Option<usize>| idx.map(cell).filter(|v| !v.is_empty());
        let text = |idx: Option<usize>| present(idx).map(str::to_string);

        Ok(TripRecord {
            row,
            start_time: parse_timestamp(row, START_TIME, cell(self.start_time))?,
            end_time: present(Some(self.end_time))
                .map(|raw| parse_timestamp(row, END_TIME, raw))
                .transpose()?,
            trip_duration: present(Some(self.trip_duration))
                .map(|raw| parse_number(row, TRIP_DURATION, raw))
                .transpose()?,
            start_station: text(Some(self.start_station)),
            end_station: text(Some(self.end_station)),
            user_type: text(Some(self.user_type)),
            gender: text(self.gender),
            birth_year: present(self.birth_year)
                .map(|raw| parse_number(row, BIRTH_YEAR, raw).map(|y| y as i32))
                .transpose()?,
        })
    }
}

fn parse_timestamp(row: usize, column: &str, raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|e| {
        Error::invalid_record(row, format!("cannot parse '{raw}' in '{column}' as timestamp: {e}"))
    })
}

fn parse_number(row: usize, column: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| Error::invalid_record(row, format!("cannot parse '{raw}' in '{column}' as number")))
}

/// Trip records of one city narrowed by a filter selection.
#[derive(Debug, Clone)]
pub struct Dataset {
    selection: FilterSelection,
    trips: Vec<Trip>,
    columns: OptionalColumns,
    source_rows: usize,
}

impl Dataset {
    /// Reads the selected city's file through the catalog and applies the
    /// month/day filters.
    pub fn load(catalog: &CityCatalog, selection: &FilterSelection) -> Result<Self> {
        let path = catalog.path_for(selection.city);
        let file = File::open(&path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {e}", path.display()),
            ))
        })?;
        let dataset = Self::from_reader(
            selection.city,
            BufReader::new(file),
            &path.display().to_string(),
        )?;
        Ok(dataset.filter(selection.month, selection.day))
    }

    /// Parses every row of `reader`; the result is unfiltered.
    pub fn from_reader<R: Read>(city: City, reader: R, source: &str) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let map = ColumnMap::from_headers(&headers, source)?;

        let mut trips = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            trips.push(Trip::new(map.parse_record(row, &record)?));
        }

        Ok(Self {
            selection: FilterSelection::unfiltered(city),
            source_rows: trips.len(),
            trips,
            columns: map.optional_columns(),
        })
    }

    /// Keeps only trips whose derived month and weekday pass both filters.
    pub fn filter(mut self, month: Filter<Month>, day: Filter<DayOfWeek>) -> Self {
        let month_number = match month {
            Filter::All => Filter::All,
            Filter::Only(m) => Filter::Only(m.number()),
        };
        self.trips
            .retain(|t| month_number.matches(&t.month) && day.matches(&t.day_of_week));
        self.selection.month = month;
        self.selection.day = day;
        self
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn city(&self) -> City {
        self.selection.city
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn columns(&self) -> OptionalColumns {
        self.columns
    }

    /// Row count of the source file before filtering.
    pub fn source_rows(&self) -> usize {
        self.source_rows
    }

    /// Rows `[offset, offset + size)`, clipped to the dataset length.
    pub fn page(&self, offset: usize, size: usize) -> &[Trip] {
        if offset >= self.trips.len() {
            return &[];
        }
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[offset..end]
    }
}

/// Resolves `city` through the catalog, then loads and filters its trips.
pub fn load_data(
    catalog: &CityCatalog,
    city: &str,
    month: Filter<Month>,
    day: Filter<DayOfWeek>,
) -> Result<Dataset> {
    let city = catalog.resolve(city)?;
    Dataset::load(catalog, &FilterSelection::new(city, month, day))
}
