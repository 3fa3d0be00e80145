//! The two document transformations.
//!
//! Both operate in place on a parsed `serde_json::Value` and return a summary;
//! neither touches the file system.

pub mod shelters;
pub mod trips;

pub use shelters::{enrich_features, parse_capacity, remaining_spot, sample_fill_level};
pub use trips::{back_half, truncate_paths};
