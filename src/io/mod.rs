//! Input/output helpers.
//!
//! - whole-document JSON read + atomic write (`document`)

pub mod document;

pub use document::*;
