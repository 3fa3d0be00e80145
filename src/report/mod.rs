//! Terminal output for completed runs.

pub mod format;

pub use format::*;
