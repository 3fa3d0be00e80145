//! Shared domain types.
//!
//! Documents themselves stay as `serde_json::Value` so that every field the
//! transformations don't touch is written back exactly as it was read.

use std::path::PathBuf;

use serde::Serialize;

pub const DEFAULT_TRIPS_INPUT: &str = "trips_p.json";
pub const DEFAULT_TRIPS_OUTPUT: &str = "trips_half_removed.json";
pub const DEFAULT_SHELTERS_INPUT: &str = "CA-CH_combined_lonlat.geojson";
pub const DEFAULT_SHELTERS_OUTPUT: &str = "CA-CH_combined_lonlat_with_fill.geojson";

/// Top-level collection of trip records.
pub const TRIPS_KEY: &str = "trips";
/// Per-trip ordered sequence of positions.
pub const PATH_KEY: &str = "path";

/// Top-level collection of GeoJSON features.
pub const FEATURES_KEY: &str = "features";
pub const PROPERTIES_KEY: &str = "properties";
pub const FILL_LEVEL_KEY: &str = "fill_level";
pub const REMAINING_SPOT_KEY: &str = "remaining_spot";

/// Shelter capacity as named in the source data.
pub const CAPACITY_KEY: &str = "Capacité";
/// The same capacity column after a lossy re-encoding of the source file.
///
/// Some exports carry only this variant, so it is read when the primary is
/// absent or empty.
pub const CAPACITY_FALLBACK_KEY: &str = "Capacit\u{FFFD}_1";

/// Inclusive bounds of the simulated occupancy draw.
pub const FILL_LEVEL_MIN: f64 = 0.1;
pub const FILL_LEVEL_MAX: f64 = 0.9;

/// Resolved settings for one `trips` run.
#[derive(Debug, Clone)]
pub struct TripsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Resolved settings for one `shelters` run.
#[derive(Debug, Clone)]
pub struct SheltersConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// `None` draws from OS entropy, so every run differs.
    pub seed: Option<u64>,
}

/// What the path truncation did to a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrimSummary {
    pub trips: usize,
    pub points_before: usize,
    pub points_after: usize,
}

impl TrimSummary {
    pub fn points_removed(&self) -> usize {
        self.points_before - self.points_after
    }
}

/// What the shelter enrichment did to a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichSummary {
    pub features: usize,
    /// Features whose capacity parsed to a nonzero integer.
    pub with_capacity: usize,
    /// Features written with `remaining_spot: null`.
    pub unknown_capacity: usize,
    pub total_capacity: i64,
    pub total_remaining: i64,
}

impl EnrichSummary {
    /// Aggregate occupancy over the features with a known capacity.
    pub fn overall_fill(&self) -> Option<f64> {
        if self.total_capacity <= 0 {
            return None;
        }
        Some(1.0 - self.total_remaining as f64 / self.total_capacity as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_key_carries_replacement_character() {
        assert_eq!(CAPACITY_FALLBACK_KEY, "Capacit�_1");
        assert_ne!(CAPACITY_KEY, CAPACITY_FALLBACK_KEY);
    }

    #[test]
    fn overall_fill_requires_known_capacity() {
        assert_eq!(EnrichSummary::default().overall_fill(), None);

        let summary = EnrichSummary {
            features: 2,
            with_capacity: 2,
            unknown_capacity: 0,
            total_capacity: 200,
            total_remaining: 50,
        };
        let fill = summary.overall_fill().unwrap();
        assert!((fill - 0.75).abs() < 1e-12);
    }
}
