//! Domain types used throughout the tool.
//!
//! This module defines:
//!
//! - the document field names both transformations read and write
//! - per-run configuration (`TripsConfig`, `SheltersConfig`)
//! - per-run summaries (`TrimSummary`, `EnrichSummary`)

pub mod types;

pub use types::*;
