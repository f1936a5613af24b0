use crate::core::dataset::Dataset;
use crate::stats::mode::mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// Most frequent `"{start} to {end}"` pair.
    pub combination: String,
}

/// Trips with a blank station are left out of that station's count and of
/// the pair count.
pub fn station_stats(dataset: &Dataset) -> Option<StationStats> {
    let trips = dataset.trips();
    let combinations: Vec<String> = trips
        .iter()
        .filter_map(|t| t.station_combination())
        .collect();
    Some(StationStats {
        start_station: mode(trips.iter().filter_map(|t| t.start_station()))?.to_string(),
        end_station: mode(trips.iter().filter_map(|t| t.end_station()))?.to_string(),
        combination: mode(combinations)?,
    })
}
