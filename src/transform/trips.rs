//! Emergency-vehicle trip path truncation.
//!
//! Every trip keeps only the back half of its `path`: for a path of length `n`
//! the kept slice starts at `n / 2`, so `ceil(n / 2)` positions remain. Applying
//! this to its own output halves the paths again.

use log::debug;
use serde_json::Value;

use crate::domain::{PATH_KEY, TRIPS_KEY, TrimSummary};
use crate::error::AppError;

/// The back half of `items`, starting at index `len / 2`.
pub fn back_half<T: Clone>(items: &[T]) -> Vec<T> {
    items[items.len() / 2..].to_vec()
}

/// Replace every trip's `path` with its back half, in place.
///
/// A document without a `trips` key has nothing to do. A trip without a `path`
/// gets an empty one.
pub fn truncate_paths(document: &mut Value) -> Result<TrimSummary, AppError> {
    let root = document
        .as_object_mut()
        .ok_or_else(|| AppError::malformed("Trips document must be a JSON object."))?;

    let Some(trips) = root.get_mut(TRIPS_KEY) else {
        return Ok(TrimSummary::default());
    };
    let trips = trips
        .as_array_mut()
        .ok_or_else(|| AppError::malformed(format!("'{TRIPS_KEY}' must be an array.")))?;

    let mut summary = TrimSummary::default();
    for (idx, trip) in trips.iter_mut().enumerate() {
        let trip = trip
            .as_object_mut()
            .ok_or_else(|| AppError::malformed(format!("Trip #{idx} is not an object.")))?;

        let kept = match trip.get(PATH_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(path)) => {
                summary.points_before += path.len();
                back_half(path)
            }
            Some(other) => {
                return Err(AppError::malformed(format!(
                    "Trip #{idx} has a '{PATH_KEY}' that is not an array (found {}).",
                    type_name(other)
                )));
            }
        };

        debug!("trip #{idx}: keeping {} positions", kept.len());
        summary.points_after += kept.len();
        summary.trips += 1;
        trip.insert(PATH_KEY.to_string(), Value::Array(kept));
    }

    Ok(summary)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
