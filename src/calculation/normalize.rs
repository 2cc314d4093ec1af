//! Input normalization for class counts.
//!
//! Form inputs arrive as loosely-typed JSON: numbers, numeric strings, empty
//! strings, negatives. The calculator only accepts non-negative integers, so
//! every count passes through [`sanitize_count`] at the boundary.

use serde_json::Value;

/// Converts an arbitrary JSON value into a class count.
///
/// - Non-negative integers pass through, clamped to `u32::MAX`.
/// - Fractional numbers are truncated toward zero.
/// - Numeric strings are parsed with the same rules after trimming.
/// - Negative, NaN, infinite, empty, unparsable and non-numeric values become 0.
///
/// # Examples
///
/// ```
/// use teacher_pay::calculation::sanitize_count;
/// use serde_json::json;
///
/// assert_eq!(sanitize_count(&json!(12)), 12);
/// assert_eq!(sanitize_count(&json!("7")), 7);
/// assert_eq!(sanitize_count(&json!(-3)), 0);
/// assert_eq!(sanitize_count(&json!("")), 0);
/// assert_eq!(sanitize_count(&json!(null)), 0);
/// ```
pub fn sanitize_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).unwrap_or(u32::MAX)
            } else if n.is_i64() {
                0
            } else {
                n.as_f64().map_or(0, count_from_f64)
            }
        }
        Value::String(s) => parse_count(s),
        _ => 0,
    }
}

/// Parses a textual count with the rules of [`sanitize_count`].
pub fn parse_count(text: &str) -> u32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    if let Ok(u) = text.parse::<u64>() {
        return u32::try_from(u).unwrap_or(u32::MAX);
    }
    text.parse::<f64>().map_or(0, count_from_f64)
}

fn count_from_f64(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX for large values.
    value.trunc() as u32
}
