//! # GuardedEntity — The Write-Validating Handle
//!
//! A [`GuardedEntity`] stands in for an [`Entity`] and screens every
//! property write: the matching rule is looked up, its validator runs,
//! and only then does the assignment commit. An invalid write never
//! touches the underlying entity — there is no partial-write state.
//!
//! Reads pass through untouched. The handle and the entity denote the
//! same logical object; once a handle exists, callers are expected to go
//! through it. [`into_inner`](GuardedEntity::into_inner) hands the raw
//! entity back, after which writes are unguarded again.

use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use fieldguard_core::ValidationError;

use crate::entity::Entity;

/// A handle over an [`Entity`] that validates every write before
/// committing it.
#[derive(Debug, Clone)]
pub struct GuardedEntity {
    inner: Entity,
}

impl GuardedEntity {
    pub(crate) fn new(inner: Entity) -> Self {
        Self { inner }
    }

    /// Read a property. Passes straight through to the entity.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner.get(name)
    }

    /// Write a property, validating first.
    ///
    /// Lookup, validate, commit — in that order, atomically from the
    /// caller's point of view: on any failure the entity is exactly as it
    /// was before the call.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] when the schema does not declare
    /// `name`; otherwise whatever the field's validator returns, unchanged.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), ValidationError> {
        let schema = self.inner.schema_handle();
        let Some(rule) = schema.rule(name) else {
            return Err(ValidationError::MissingField {
                name: name.to_string(),
            });
        };

        rule.check(&value, name)?;

        // Ok to assign the value to the key.
        self.inner.set(name, value);
        Ok(())
    }

    /// Borrow the underlying entity.
    pub fn entity(&self) -> &Entity {
        &self.inner
    }

    /// Unwrap the handle. Writes made to the returned entity are no
    /// longer validated.
    pub fn into_inner(self) -> Entity {
        self.inner
    }
}

impl From<Entity> for GuardedEntity {
    fn from(entity: Entity) -> Self {
        entity.into_guarded()
    }
}

/// Serializes exactly as the underlying entity does: data fields only.
impl Serialize for GuardedEntity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}
