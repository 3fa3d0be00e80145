//! Load -> transform -> save, shared by both subcommands.
//!
//! The whole document is transformed in memory before anything is written, so
//! a malformed input never produces an output file.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{EnrichSummary, SheltersConfig, TrimSummary, TripsConfig};
use crate::error::AppError;
use crate::io::{read_document, write_document};
use crate::transform::{enrich_features, truncate_paths};

/// Truncate every trip path in `config.input` and write the result to `config.output`.
pub fn run_trips(config: &TripsConfig) -> Result<TrimSummary, AppError> {
    let mut document = read_document(&config.input)?;
    let summary = truncate_paths(&mut document)?;
    write_document(&config.output, &document)?;
    Ok(summary)
}

/// Enrich every shelter in `config.input` and write the result to `config.output`.
pub fn run_shelters(config: &SheltersConfig) -> Result<EnrichSummary, AppError> {
    let mut rng = match config.seed {
        Some(seed) => {
            debug!("fill levels seeded with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    run_shelters_with_rng(config, &mut rng)
}

/// Same as [`run_shelters`] with a caller-provided generator.
pub fn run_shelters_with_rng<R: Rng>(
    config: &SheltersConfig,
    rng: &mut R,
) -> Result<EnrichSummary, AppError> {
    let mut document = read_document(&config.input)?;
    let summary = enrich_features(&mut document, rng)?;
    write_document(&config.output, &document)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EXIT_IO, EXIT_MALFORMED};
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::tempdir;

    fn read(path: &std::path::Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn trips_end_to_end() {
        let dir = tempdir().unwrap();
        let config = TripsConfig {
            input: dir.path().join("trips_p.json"),
            output: dir.path().join("trips_half_removed.json"),
        };
        fs::write(
            &config.input,
            r#"{"trips": [{"vendor": 0, "path": [[1,1],[2,2],[3,3],[4,4],[5,5]]}, {"vendor": 1}]}"#,
        )
        .unwrap();

        let summary = run_trips(&config).unwrap();

        assert_eq!(summary.trips, 2);
        assert_eq!(
            read(&config.output),
            json!({"trips": [
                {"vendor": 0, "path": [[3,3],[4,4],[5,5]]},
                {"vendor": 1, "path": []}
            ]})
        );
        // Input is left untouched.
        assert_eq!(read(&config.input)["trips"][0]["path"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn malformed_trips_write_nothing() {
        let dir = tempdir().unwrap();
        let config = TripsConfig {
            input: dir.path().join("trips_p.json"),
            output: dir.path().join("out.json"),
        };
        fs::write(&config.input, r#"{"trips": [{"path": 12}]}"#).unwrap();

        let err = run_trips(&config).unwrap_err();

        assert_eq!(err.exit_code(), EXIT_MALFORMED);
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = tempdir().unwrap();
        let config = SheltersConfig {
            input: dir.path().join("absent.geojson"),
            output: dir.path().join("out.geojson"),
            seed: Some(1),
        };

        let err = run_shelters(&config).unwrap_err();

        assert_eq!(err.exit_code(), EXIT_IO);
        assert!(!config.output.exists());
    }

    #[test]
    fn shelters_end_to_end_preserves_non_ascii() {
        let dir = tempdir().unwrap();
        let config = SheltersConfig {
            input: dir.path().join("CA-CH_combined_lonlat.geojson"),
            output: dir.path().join("CA-CH_combined_lonlat_with_fill.geojson"),
            seed: Some(2024),
        };
        fs::write(
            &config.input,
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [5.57, 50.63]},
                 "properties": {"Nom": "Centre d'accueil Liège", "Capacité": "150"}},
                {"type": "Feature", "geometry": null, "properties": {"Nom": "Église"}}
            ]}"#,
        )
        .unwrap();

        let summary = run_shelters(&config).unwrap();

        assert_eq!(summary.features, 2);
        assert_eq!(summary.with_capacity, 1);
        assert_eq!(summary.unknown_capacity, 1);

        let text = fs::read_to_string(&config.output).unwrap();
        assert!(text.contains("Liège"));
        assert!(text.contains("Église"));
        assert!(text.contains("\"Capacité\""));

        let doc = read(&config.output);
        let first = &doc["features"][0]["properties"];
        let fill = first["fill_level"].as_f64().unwrap();
        assert_eq!(
            first["remaining_spot"].as_i64().unwrap(),
            (150.0 * (1.0 - fill)).floor() as i64
        );
        assert!(doc["features"][1]["properties"]["remaining_spot"].is_null());
        assert!(doc["features"][1]["geometry"].is_null());
    }

    #[test]
    fn seeded_shelter_runs_match() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.geojson");
        fs::write(
            &input,
            r#"{"features": [{"properties": {"Capacité": 40}}, {"properties": {"Capacité": 75}}]}"#,
        )
        .unwrap();

        let first = SheltersConfig {
            input: input.clone(),
            output: dir.path().join("a.geojson"),
            seed: Some(5),
        };
        let second = SheltersConfig {
            output: dir.path().join("b.geojson"),
            ..first.clone()
        };
        run_shelters(&first).unwrap();
        run_shelters(&second).unwrap();

        assert_eq!(read(&first.output), read(&second.output));
    }
}
