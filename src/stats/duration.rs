use crate::core::dataset::Dataset;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    /// Seconds.
    pub total: f64,
    /// Seconds, unrounded.
    pub mean: f64,
}

/// Sum and mean over the trips that record a duration. `None` when no trip
/// in the selection has one.
pub fn trip_duration_stats(dataset: &Dataset) -> Option<DurationStats> {
    let durations: Vec<f64> = dataset
        .trips()
        .iter()
        .filter_map(|t| t.record.trip_duration)
        .collect();
    if durations.is_empty() {
        return None;
    }
    let total: f64 = durations.iter().sum();
    Some(DurationStats {
        total,
        mean: total / durations.len() as f64,
    })
}
