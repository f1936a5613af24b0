use crate::core::types::DayOfWeek;
use chrono::{Datelike, Weekday};

pub trait DayOfWeekExt {
    fn day_of_week(&self) -> DayOfWeek;
}

impl<T: Datelike> DayOfWeekExt for T {
    fn day_of_week(&self) -> DayOfWeek {
        match self.weekday() {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}
