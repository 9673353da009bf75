//! Forgiving deserializers for backend-supplied numbers.
//!
//! List-item fields are optional in the output schemas, so the model is free
//! to omit them, send `null`, emit floats for counts or quote numbers. These
//! helpers map all of that onto the typed records instead of failing the
//! whole analysis.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Intent;

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

pub(crate) fn clamp_count(raw: f64) -> u64 {
    if raw.is_finite() && raw > 0.0 {
        raw.round() as u64
    } else {
        0
    }
}

pub(crate) fn clamp_score(raw: f64) -> u8 {
    if raw.is_finite() {
        raw.round().clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

/// Non-negative integer count (volume, traffic, backlinks, ...).
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).map(clamp_count).unwrap_or(0))
}

/// Score on the 0-100 scale (difficulty, authority).
pub fn score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).map(clamp_score).unwrap_or(0))
}

/// Non-negative decimal (cost per click).
pub fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).map(|v| v.max(0.0)).unwrap_or(0.0))
}

/// Plain numeric sample, negative values allowed.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).unwrap_or(0.0))
}

/// String field where `null` and non-strings read as empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Sequence of numeric samples; non-numeric entries are dropped.
pub fn samples<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(as_f64).collect(),
        _ => Vec::new(),
    })
}

/// Sequence where `null` reads as empty.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Intent on a keyword idea; unrecognised labels read as absent.
pub fn optional_intent<'de, D>(deserializer: D) -> Result<Option<Intent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(label) => match label.parse::<Intent>() {
            Ok(intent) => Some(intent),
            Err(_) => {
                log::debug!("Ignoring unrecognised keyword intent {label:?}");
                None
            }
        },
        _ => None,
    })
}
