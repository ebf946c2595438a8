//! # Standard Rule Validators
//!
//! Some very basic validators for the common cases: non-empty strings with
//! length bounds, numbers with optional range bounds, and arrays. Real
//! applications will add their own — any function matching the
//! [`FieldValidator`](crate::field::FieldValidator) signature plugs in.
//!
//! Each validator reads its bounds from the [`FieldRule`] it is attached
//! to, so one function serves every rule that carries it.

use serde_json::Value;

use crate::error::ValidationError;
use crate::field::FieldRule;

/// Length bounds used by [`string_field`] when the rule leaves them unset.
const DEFAULT_MIN_LENGTH: f64 = 0.0;
const DEFAULT_MAX_LENGTH: f64 = 255.0;

/// Require a non-empty string, returning the borrowed contents.
///
/// Non-string values count as empty.
pub fn non_empty_string<'a>(value: &'a Value, name: &str) -> Result<&'a str, ValidationError> {
    match value.as_str() {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::EmptyString {
            name: name.to_string(),
        }),
    }
}

/// Validate a non-empty string whose character count lies within the
/// rule's `min..=max` bounds (defaults 0 and 255).
pub fn string_field(value: &Value, rule: &FieldRule, name: &str) -> Result<(), ValidationError> {
    let s = non_empty_string(value, name)?;
    let min = rule.min.unwrap_or(DEFAULT_MIN_LENGTH);
    let max = rule.max.unwrap_or(DEFAULT_MAX_LENGTH);
    let length = s.chars().count() as f64;

    if length < min || length > max {
        return Err(ValidationError::LengthOutOfRange {
            name: name.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

/// Validate a JSON number, honoring the rule's `min`/`max` bounds when set.
pub fn number_field(value: &Value, rule: &FieldRule, name: &str) -> Result<(), ValidationError> {
    let n = value.as_f64().ok_or_else(|| ValidationError::TypeMismatch {
        name: name.to_string(),
        expected: "a number",
    })?;

    let below = rule.min.is_some_and(|min| n < min);
    let above = rule.max.is_some_and(|max| n > max);
    if below || above {
        return Err(ValidationError::OutOfRange {
            name: name.to_string(),
            min: rule.min.unwrap_or(f64::NEG_INFINITY),
            max: rule.max.unwrap_or(f64::INFINITY),
            value: n,
        });
    }
    Ok(())
}

/// Validate a JSON array. Element contents are not inspected.
pub fn array_field(value: &Value, _rule: &FieldRule, name: &str) -> Result<(), ValidationError> {
    if !value.is_array() {
        return Err(ValidationError::TypeMismatch {
            name: name.to_string(),
            expected: "an array",
        });
    }
    Ok(())
}

/// A required string rule with the given length bounds.
pub fn string(min: f64, max: f64) -> FieldRule {
    FieldRule::new().min(min).max(max).validator(string_field)
}

/// A required number rule with no bounds.
pub fn number() -> FieldRule {
    FieldRule::new().validator(number_field)
}

/// A required array rule.
pub fn array() -> FieldRule {
    FieldRule::new().validator(array_field)
}
