//! Shelter occupancy simulation.
//!
//! Each feature gets a random `fill_level` in [0.1, 0.9] (two decimals) and a
//! `remaining_spot` derived from its capacity, or `null` when the capacity is
//! unknown. Geometry and every other property are left alone.

use log::debug;
use rand::Rng;
use serde_json::{Map, Value};

use crate::domain::{
    CAPACITY_FALLBACK_KEY, CAPACITY_KEY, EnrichSummary, FEATURES_KEY, FILL_LEVEL_KEY,
    FILL_LEVEL_MAX, FILL_LEVEL_MIN, PROPERTIES_KEY, REMAINING_SPOT_KEY,
};
use crate::error::AppError;

/// Draw a fill level uniformly from [0.1, 0.9], rounded to two decimals.
pub fn sample_fill_level<R: Rng>(rng: &mut R) -> f64 {
    let raw: f64 = rng.gen_range(FILL_LEVEL_MIN..=FILL_LEVEL_MAX);
    (raw * 100.0).round() / 100.0
}

/// Capacity of a shelter, or 0 when missing or unparsable.
///
/// The fallback column is consulted when the primary one is absent or empty
/// (`null`, `""`, `0`, `false`). `true` counts as 1.
pub fn parse_capacity(properties: &Map<String, Value>) -> i64 {
    let raw = match properties.get(CAPACITY_KEY) {
        Some(value) if is_truthy(value) => Some(value),
        _ => {
            let fallback = properties.get(CAPACITY_FALLBACK_KEY);
            if fallback.is_some() {
                debug!("using fallback capacity column");
            }
            fallback
        }
    };

    let capacity = match raw {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(Value::Bool(b)) => Some(i64::from(*b)),
        _ => None,
    };

    capacity.unwrap_or_else(|| {
        if let Some(value) = raw {
            debug!("unparsable capacity {value}");
        }
        0
    })
}

/// `floor(capacity * (1 - fill_level))`, or `None` when the capacity is unknown.
///
/// Negative capacities are passed through the same formula.
pub fn remaining_spot(capacity: i64, fill_level: f64) -> Option<i64> {
    if capacity == 0 {
        return None;
    }
    Some((capacity as f64 * (1.0 - fill_level)).floor() as i64)
}

/// Annotate every feature's properties with `fill_level` and `remaining_spot`.
pub fn enrich_features<R: Rng>(
    document: &mut Value,
    rng: &mut R,
) -> Result<EnrichSummary, AppError> {
    let features = document
        .get_mut(FEATURES_KEY)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| {
            AppError::malformed(format!("Shelter document must have a '{FEATURES_KEY}' array."))
        })?;

    let mut summary = EnrichSummary::default();
    for (idx, feature) in features.iter_mut().enumerate() {
        let feature = feature
            .as_object_mut()
            .ok_or_else(|| AppError::malformed(format!("Feature #{idx} is not an object.")))?;

        let properties = feature
            .entry(PROPERTIES_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if properties.is_null() {
            *properties = Value::Object(Map::new());
        }
        let properties = properties.as_object_mut().ok_or_else(|| {
            AppError::malformed(format!("Feature #{idx} has non-object '{PROPERTIES_KEY}'."))
        })?;

        let fill_level = sample_fill_level(rng);
        properties.insert(FILL_LEVEL_KEY.to_string(), Value::from(fill_level));

        let capacity = parse_capacity(properties);
        let remaining = remaining_spot(capacity, fill_level);
        properties.insert(REMAINING_SPOT_KEY.to_string(), remaining.map_or(Value::Null, Value::from));

        summary.features += 1;
        match remaining {
            Some(spots) => {
                summary.with_capacity += 1;
                summary.total_capacity = summary.total_capacity.saturating_add(capacity);
                summary.total_remaining = summary.total_remaining.saturating_add(spots);
            }
            None => summary.unknown_capacity += 1,
        }
    }

    Ok(summary)
}

/// Whether a capacity value counts as "present" for the fallback rule.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
