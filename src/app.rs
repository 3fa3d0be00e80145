//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initialises logging
//! - parses CLI arguments
//! - runs the selected transformation
//! - prints the success line

use clap::Parser;
use log::{debug, info};

use crate::cli::{Command, SheltersArgs, TripsArgs};
use crate::domain::{SheltersConfig, TripsConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `geoprep` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may carry RUST_LOG, so it has to be loaded before the logger reads it.
    dotenvy::dotenv().ok();
    init_logging();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Trips(args) => handle_trips(args),
        Command::Shelters(args) => handle_shelters(args),
    }
}

fn init_logging() {
    // Logs go to stderr; stdout is reserved for the success line.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn handle_trips(args: TripsArgs) -> Result<(), AppError> {
    let config = trips_config_from_args(&args);
    let summary = pipeline::run_trips(&config)?;

    info!("{}", crate::report::format_trim_summary(&summary));
    debug!("summary: {}", serde_json::to_string(&summary).unwrap_or_default());
    println!("{}", crate::report::trips_success_line(&config.output));
    Ok(())
}

fn handle_shelters(args: SheltersArgs) -> Result<(), AppError> {
    let config = shelters_config_from_args(&args);
    let summary = pipeline::run_shelters(&config)?;

    info!("{}", crate::report::format_enrich_summary(&summary));
    debug!("summary: {}", serde_json::to_string(&summary).unwrap_or_default());
    println!("{}", crate::report::shelters_success_line());
    Ok(())
}

pub fn trips_config_from_args(args: &TripsArgs) -> TripsConfig {
    TripsConfig {
        input: args.input.clone(),
        output: args.output.clone(),
    }
}

pub fn shelters_config_from_args(args: &SheltersArgs) -> SheltersConfig {
    SheltersConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        seed: args.seed,
    }
}
