//! Lenient field decoding for spreadsheet-backed records
//!
//! Sheet cells arrive as strings, numbers, booleans or `null` depending on
//! how the cell was formatted. These helpers normalise them so a single odd
//! cell never rejects the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a numeric-as-string cell.
///
/// Surrounding whitespace is ignored. A lone comma is accepted as the decimal
/// separator (`"2,5"`). Empty, non-numeric and non-finite values yield
/// `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = trimmed.parse::<f64>().ok().or_else(|| {
        if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
            trimmed.replace(',', ".").parse::<f64>().ok()
        } else {
            None
        }
    })?;

    parsed.is_finite().then_some(parsed)
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Deserialize any scalar cell into a `String`; `null` becomes `""`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(value_to_string).unwrap_or_default())
}

/// Deserialize a tag cell through its `From<String>` conversion.
pub fn tag<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    string(deserializer).map(T::from)
}

/// Deserialize a number cell that may also be a numeric string, an empty
/// string or `null`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(s)) => parse_number(&s),
        _ => None,
    })
}
