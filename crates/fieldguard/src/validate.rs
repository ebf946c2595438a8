//! # Bulk Validation
//!
//! One-shot validation of every property an entity currently holds
//! against its schema. Two independent policies modulate the scan:
//!
//! - `ignore_undefined_properties` — `Null`-valued fields are treated as
//!   unset and skipped.
//! - `allow_extra_properties` — fields the schema does not declare are
//!   tolerated instead of failing the call.
//!
//! ## Algorithm
//!
//! 1. Cardinality guard: with extras disallowed, more data fields than
//!    declared fields fails immediately with
//!    [`ValidationError::TooManyProperties`]. The guard compares counts
//!    only — same count under different names passes this stage and is
//!    caught by the membership scan below.
//! 2. Per-field scan over the entity's own keys: an undeclared key marks
//!    the result incomplete (vacuously valid when extras are allowed); a
//!    rule with `required == false` is skipped; otherwise the rule's
//!    validator runs and its first failure is propagated unchanged.
//! 3. An incomplete result with extras disallowed fails with the same
//!    `TooManyProperties` error, reused as the schema-mismatch signal.
//!
//! The scan iterates the entity's own keys, so declared fields absent
//! from the instance are not flagged. (The inverse policy — scanning the
//! schema's keys and flagging missing instance fields — is a documented
//! variant this engine does not implement.)
//!
//! No aggregation across fields, no coercion, no defaulting: a successful
//! call returns the entity unchanged.

use fieldguard_core::ValidationError;

use crate::entity::Entity;
use crate::guard::GuardedEntity;

/// Policies for one bulk-validation call. Both default to off (strict).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Treat `Null`-valued fields as unset: they are not checked against
    /// their rule and do not count as undeclared.
    pub ignore_undefined_properties: bool,
    /// Tolerate fields the schema does not declare. Such fields are left
    /// intact and unvalidated.
    pub allow_extra_properties: bool,
}

impl ValidateOptions {
    /// Strict defaults: undefined properties are validated, extras fail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable `ignore_undefined_properties`.
    pub fn ignore_undefined(mut self) -> Self {
        self.ignore_undefined_properties = true;
        self
    }

    /// Enable `allow_extra_properties`.
    pub fn allow_extra(mut self) -> Self {
        self.allow_extra_properties = true;
        self
    }
}

impl Entity {
    /// Validate every property this entity currently holds against its
    /// schema. See the module docs for the exact policy semantics.
    ///
    /// Returns the entity unchanged on success, so calls chain.
    ///
    /// # Errors
    ///
    /// [`ValidationError::TooManyProperties`] when the field count exceeds
    /// the schema (extras disallowed) or when an undeclared field is
    /// present (extras disallowed); otherwise, the first rule failure in
    /// field-name order, propagated unchanged.
    pub fn validate(&self, options: ValidateOptions) -> Result<&Self, ValidationError> {
        let schema = self.schema();

        // Stage one: coarse cardinality guard, count only.
        if !options.allow_extra_properties && self.len() > schema.len() {
            return Err(ValidationError::TooManyProperties {
                allowed: schema.allowed_fields(),
            });
        }

        // Stage two: membership and per-rule checks over the entity's
        // own keys.
        let mut complete = true;
        for (name, value) in self.data() {
            if options.ignore_undefined_properties && value.is_null() {
                continue;
            }

            let Some(rule) = schema.rule(name) else {
                // Undeclared key: vacuously valid when extras are
                // allowed, otherwise remembered for the mismatch error
                // below. The scan keeps going either way, so a later
                // field's own failure still surfaces first.
                complete = false;
                continue;
            };

            if !rule.required {
                continue;
            }

            rule.check(value, name)?;
        }

        if !options.allow_extra_properties && !complete {
            return Err(ValidationError::TooManyProperties {
                allowed: schema.allowed_fields(),
            });
        }

        Ok(self)
    }
}

impl GuardedEntity {
    /// Bulk-validate the underlying entity. Identical to
    /// [`Entity::validate`]; the guard adds nothing to a read-only check.
    pub fn validate(&self, options: ValidateOptions) -> Result<&Self, ValidationError> {
        self.entity().validate(options)?;
        Ok(self)
    }
}
