//! Descriptive statistics over a filtered dataset.
//!
//! Every report is a pure function of a read-only [`Dataset`] and returns
//! `None` when the dataset has no rows.
//!
//! [`Dataset`]: crate::core::dataset::Dataset

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationStats, trip_duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{BirthYearStats, ColumnStat, UserStats, user_stats};
