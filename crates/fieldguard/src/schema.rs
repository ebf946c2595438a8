//! # Schema — The Name → Rule Binding
//!
//! A [`Schema`] maps property names to [`FieldRule`]s. It is built once,
//! bound to an entity at construction time, and never mutated afterwards.
//! Shared via `Arc` when many entities are governed by the same rules.
//!
//! A `BTreeMap` backs the mapping so the declared-field list (used in
//! error messages) and the bulk-validation scan order are deterministic.

use std::collections::BTreeMap;

use fieldguard_core::FieldRule;

/// Immutable mapping from property name to validation rule.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: BTreeMap<String, FieldRule>,
}

impl Schema {
    /// An empty schema. An entity bound to it declares no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, builder style.
    ///
    /// Re-declaring a name replaces the previous rule.
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(name.into(), rule);
        self
    }

    /// Look up the rule for a property.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Whether the schema declares the property.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The declared field names, sorted alphabetically.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Owned copy of the declared field names, sorted. Used for the
    /// allowed-field list carried by mismatch errors.
    pub fn allowed_fields(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    /// Iterate over `(name, rule)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

impl FromIterator<(String, FieldRule)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, FieldRule)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
