//! Formatted success lines and run summaries.
//!
//! Success lines go to stdout; summaries are logged so that stdout stays a
//! single line per run.

use std::path::Path;

use crate::domain::{EnrichSummary, TrimSummary};

pub fn trips_success_line(output: &Path) -> String {
    format!(
        "✅ First half of each path removed and saved to '{}'",
        output.display()
    )
}

pub fn shelters_success_line() -> String {
    "✅ Added 'fill_level' and 'remaining_spot' to all features.".to_string()
}

pub fn format_trim_summary(summary: &TrimSummary) -> String {
    format!(
        "{} trips, {} positions kept of {} ({} removed)",
        summary.trips,
        summary.points_after,
        summary.points_before,
        summary.points_removed()
    )
}

pub fn format_enrich_summary(summary: &EnrichSummary) -> String {
    let mut out = format!(
        "{} features, {} with capacity, {} unknown",
        summary.features, summary.with_capacity, summary.unknown_capacity
    );
    if let Some(fill) = summary.overall_fill() {
        out.push_str(&format!(
            "; {} of {} spots remaining ({:.0}% full)",
            summary.total_remaining,
            summary.total_capacity,
            fill * 100.0
        ));
    }
    out
}
