use crate::core::dataset::Dataset;
use crate::core::types::{DayOfWeek, Month};
use crate::stats::mode::mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number, 1-based.
    pub month: u32,
    pub day_of_week: DayOfWeek,
    pub hour: u32,
}

impl TimeStats {
    pub fn month_name(&self) -> String {
        if let Some(m) = Month::from_number(self.month) {
            return m.title();
        }
        u8::try_from(self.month)
            .ok()
            .and_then(|n| chrono::Month::try_from(n).ok())
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| self.month.to_string())
    }

    pub fn day_name(&self) -> String {
        self.day_of_week.title()
    }
}

/// Most common month, weekday and start hour.
pub fn time_stats(dataset: &Dataset) -> Option<TimeStats> {
    let trips = dataset.trips();
    Some(TimeStats {
        month: mode(trips.iter().map(|t| t.month))?,
        day_of_week: mode(trips.iter().map(|t| t.day_of_week))?,
        hour: mode(trips.iter().map(|t| t.hour))?,
    })
}
