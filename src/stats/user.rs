use crate::core::dataset::Dataset;
use crate::stats::mode::{mode, value_counts};

/// Result for a column that only some cities publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnStat<T> {
    /// The city's file has no such column.
    Unavailable,
    Computed(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: ColumnStat<Vec<(String, usize)>>,
    /// `Computed(None)` when the column exists but every selected cell is blank.
    pub birth_years: ColumnStat<Option<BirthYearStats>>,
}

pub fn user_stats(dataset: &Dataset) -> Option<UserStats> {
    if dataset.is_empty() {
        return None;
    }
    let trips = dataset.trips();
    let columns = dataset.columns();

    let user_types = value_counts(trips.iter().filter_map(|t| t.record.user_type.clone()));

    let genders = if columns.gender {
        ColumnStat::Computed(value_counts(
            trips.iter().filter_map(|t| t.record.gender.clone()),
        ))
    } else {
        ColumnStat::Unavailable
    };

    let birth_years = if columns.birth_year {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.record.birth_year).collect();
        ColumnStat::Computed(birth_year_stats(&years))
    } else {
        ColumnStat::Unavailable
    };

    Some(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

fn birth_year_stats(years: &[i32]) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}
