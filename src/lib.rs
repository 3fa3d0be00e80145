//! `geo-prep` library crate.
//!
//! The binary (`geoprep`) is a thin wrapper around this library so that the
//! transformations are testable without spawning processes or touching the
//! working directory.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod transform;
