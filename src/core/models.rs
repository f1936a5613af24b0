use crate::core::types::DayOfWeek;
use crate::extensions::chrono::DayOfWeekExt;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// One row of a city's trip file, as read from disk. Blank cells are `None`;
/// only the start time is required.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based row position in the source file.
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Seconds.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// A trip record plus the calendar fields derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub record: TripRecord,
    pub month: u32,
    pub day_of_week: DayOfWeek,
    pub hour: u32,
}

impl Trip {
    pub fn new(record: TripRecord) -> Self {
        let start = record.start_time;
        Self {
            month: start.month(),
            day_of_week: start.day_of_week(),
            hour: start.hour(),
            record,
        }
    }

    pub fn start_station(&self) -> Option<&str> {
        self.record.start_station.as_deref()
    }

    pub fn end_station(&self) -> Option<&str> {
        self.record.end_station.as_deref()
    }

    /// `"{start} to {end}"` label used by the station report; `None` unless
    /// both stations are known.
    pub fn station_combination(&self) -> Option<String> {
        Some(format!(
            "{} to {}",
            self.start_station()?,
            self.end_station()?
        ))
    }
}
