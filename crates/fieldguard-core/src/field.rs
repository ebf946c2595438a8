//! # Field Rules — The Per-Property Validation Contract
//!
//! A [`FieldRule`] describes how one property of a governed object is
//! validated: optional `min`/`max` bounds, a `required` flag (default
//! true), and an optional validator callback. Rules are stateless and
//! cheaply cloneable; the same rule may be shared across many schemas.
//!
//! The engine never interprets `min`/`max` itself — they are carried for
//! the validator callback, which receives the whole rule alongside the
//! candidate value and the property name.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;

/// Signature of a field validator callback.
///
/// Receives the candidate value, the complete rule (so bounds and any
/// captured state are available), and the property name for error
/// messages. Returns `Ok(())` to accept the value; any error rejects it
/// and is propagated to the caller unchanged.
pub type FieldValidator =
    Arc<dyn Fn(&Value, &FieldRule, &str) -> Result<(), ValidationError> + Send + Sync>;

/// Validation rule for a single property.
#[derive(Clone)]
pub struct FieldRule {
    /// Inclusive lower bound, interpreted by the validator (e.g. minimum
    /// string length, minimum numeric value).
    pub min: Option<f64>,
    /// Inclusive upper bound, interpreted by the validator.
    pub max: Option<f64>,
    /// Whether the field participates in bulk validation. A rule with
    /// `required == false` is always treated as valid there.
    pub required: bool,
    /// The validator callback. A rule without one is vacuously valid.
    pub validate: Option<FieldValidator>,
}

impl Default for FieldRule {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            required: true,
            validate: None,
        }
    }
}

impl FieldRule {
    /// A required rule with no bounds and no validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Mark the field as not required: bulk validation skips it entirely,
    /// whatever its value.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Install the validator callback.
    pub fn validator<F>(mut self, validate: F) -> Self
    where
        F: Fn(&Value, &FieldRule, &str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(validate));
        self
    }

    /// Run this rule's validator against a candidate value.
    ///
    /// A rule without a validator accepts every value.
    pub fn check(&self, value: &Value, name: &str) -> Result<(), ValidationError> {
        match &self.validate {
            Some(validate) => validate(value, self, name),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("required", &self.required)
            .field("validate", &self.validate.as_ref().map(|_| "<validator>"))
            .finish()
    }
}
