//! # Error Types — Structured Validation Errors
//!
//! The single error enum shared by the rule validators and the validation
//! engine. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! - Every variant names the property it concerns; callers branch on the
//!   variant, not on message text.
//! - The engine never reinterprets a rule failure: a validator's error is
//!   propagated to the caller unchanged, first failure wins.
//! - `TooManyProperties` doubles as the general schema-mismatch signal for
//!   bulk validation and always carries the full allowed-field list.

use thiserror::Error;

/// Error raised by a field rule or by the validation engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The object carries more properties than the schema declares, or a
    /// property that the schema does not declare. Raised by bulk
    /// validation when extra properties are disallowed.
    #[error("only fields: {} are allowed", .allowed.join(","))]
    TooManyProperties {
        /// The full set of declared field names, sorted.
        allowed: Vec<String>,
    },

    /// A guarded write targeted a property absent from the schema.
    #[error("missing field: {name}")]
    MissingField {
        /// The property name that was written.
        name: String,
    },

    /// Factory input would shadow a capability of the entity surface.
    #[error("property \"{name}\" is a reserved property name")]
    ReservedProperty {
        /// The offending input key.
        name: String,
    },

    /// The value is not a string, or is the empty string.
    #[error("\"{name}\" must be a non empty string")]
    EmptyString {
        /// The property name.
        name: String,
    },

    /// A string's length falls outside the rule's bounds.
    #[error("{name} should be between {min} and {max}")]
    LengthOutOfRange {
        /// The property name.
        name: String,
        /// Inclusive lower length bound.
        min: f64,
        /// Inclusive upper length bound.
        max: f64,
    },

    /// The value has the wrong JSON type for the rule.
    #[error("expected {name} to be {expected}")]
    TypeMismatch {
        /// The property name.
        name: String,
        /// Human-readable expected type ("a number", "an array").
        expected: &'static str,
    },

    /// A numeric value falls outside the rule's bounds.
    #[error("{name} should be between {min} and {max}, got {value}")]
    OutOfRange {
        /// The property name.
        name: String,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
        /// The rejected value.
        value: f64,
    },

    /// Catch-all for custom rule validators.
    #[error("invalid value for {name}: {reason}")]
    Invalid {
        /// The property name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}
