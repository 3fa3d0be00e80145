//! Command-line parsing for the trip/shelter preparation tool.
//!
//! Argument parsing stays here; the transformations themselves live in
//! `crate::transform` and never see clap types.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{
    DEFAULT_SHELTERS_INPUT, DEFAULT_SHELTERS_OUTPUT, DEFAULT_TRIPS_INPUT, DEFAULT_TRIPS_OUTPUT,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "geoprep", version, about = "Prepare trip and shelter data for the mobility map")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Keep only the back half of every trip's `path`.
    ///
    /// Running this twice on the same data halves the paths again.
    Trips(TripsArgs),
    /// Add a simulated `fill_level` and derived `remaining_spot` to every shelter.
    Shelters(SheltersArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct TripsArgs {
    /// Trips JSON document to read.
    #[arg(short, long, value_name = "JSON", default_value = DEFAULT_TRIPS_INPUT)]
    pub input: PathBuf,

    /// Where to write the truncated document (overwritten if present).
    #[arg(short, long, value_name = "JSON", default_value = DEFAULT_TRIPS_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Debug, Parser, Clone)]
pub struct SheltersArgs {
    /// Shelter GeoJSON document to read.
    #[arg(short, long, value_name = "GEOJSON", default_value = DEFAULT_SHELTERS_INPUT)]
    pub input: PathBuf,

    /// Where to write the enriched document (overwritten if present).
    #[arg(short, long, value_name = "GEOJSON", default_value = DEFAULT_SHELTERS_OUTPUT)]
    pub output: PathBuf,

    /// Seed the fill-level generator for a reproducible run.
    ///
    /// Without it every run draws fresh occupancy values.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_defaults_to_fixed_file_names() {
        let cli = Cli::parse_from(["geoprep", "trips"]);
        let Command::Trips(args) = cli.command else {
            panic!("expected trips subcommand");
        };
        assert_eq!(args.input, PathBuf::from("trips_p.json"));
        assert_eq!(args.output, PathBuf::from("trips_half_removed.json"));
    }

    #[test]
    fn shelters_accepts_seed_and_paths() {
        let cli = Cli::parse_from([
            "geoprep", "shelters", "--seed", "7", "-i", "in.geojson", "-o", "out.geojson",
        ]);
        let Command::Shelters(args) = cli.command else {
            panic!("expected shelters subcommand");
        };
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.input, PathBuf::from("in.geojson"));
        assert_eq!(args.output, PathBuf::from("out.geojson"));
    }

    #[test]
    fn shelters_is_unseeded_by_default() {
        let cli = Cli::parse_from(["geoprep", "shelters"]);
        let Command::Shelters(args) = cli.command else {
            panic!("expected shelters subcommand");
        };
        assert_eq!(args.seed, None);
        assert_eq!(args.output, PathBuf::from("CA-CH_combined_lonlat_with_fill.geojson"));
    }
}
