//! # Entity — A Schema-Governed Data Object
//!
//! An [`Entity`] is a plain keyed object (a `serde_json` map) that owns a
//! reference to the [`Schema`] governing it. The schema lives alongside
//! the data, not inside it: it never appears in the entity's key set and
//! is never serialized with it.
//!
//! ## Construction
//!
//! - [`Entity::new`] / [`Entity::with_schema`] — empty entity bound to a
//!   schema.
//! - [`Entity::from_object`] — the factory: copies a plain object's fields
//!   into a fresh entity, rejecting keys that would shadow the entity's
//!   own method surface.
//! - [`Entity::from_object_guarded`] — same, but returns the entity
//!   already wrapped in a [`GuardedEntity`] so every later write is
//!   validated.
//!
//! Direct mutation through [`Entity::set`] is unguarded; callers that want
//! every write screened use [`Entity::into_guarded`].

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use fieldguard_core::ValidationError;

use crate::guard::GuardedEntity;
use crate::schema::Schema;

/// Method names on the entity surface — everything [`Entity`] and
/// [`GuardedEntity`] expose. Factory input must not shadow them: a data
/// field named like one of these would make the object's own behavior
/// unreachable in the dynamic rendition this models.
const RESERVED_PROPERTIES: &[&str] = &[
    // Constructors and factories
    "new",
    "with_schema",
    "from_object",
    "from_object_guarded",
    // Validation and guarding
    "validate",
    "into_guarded",
    "entity",
    "into_inner",
    // Schema access
    "schema",
    "schema_handle",
    // Data access
    "get",
    "set",
    "remove",
    "data",
    "len",
    "is_empty",
];

/// A plain data object bound to the [`Schema`] that governs it.
#[derive(Debug, Clone)]
pub struct Entity {
    schema: Arc<Schema>,
    data: Map<String, Value>,
}

impl Entity {
    /// An empty entity bound to `schema`.
    pub fn new(schema: Schema) -> Self {
        Self::with_schema(Arc::new(schema))
    }

    /// An empty entity bound to an already-shared schema. Lets many
    /// entities be governed by one set of rules without cloning it.
    pub fn with_schema(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            data: Map::new(),
        }
    }

    /// Build an entity from a plain object's fields.
    ///
    /// Each input key is copied unguarded — no rule runs at this stage;
    /// call [`validate`](Entity::validate) afterwards to check the result,
    /// or use [`from_object_guarded`](Entity::from_object_guarded) to
    /// screen future writes. Keys naming a reserved capability of the
    /// entity surface are rejected with
    /// [`ValidationError::ReservedProperty`] and no entity is returned.
    pub fn from_object(data: Map<String, Value>, schema: Schema) -> Result<Self, ValidationError> {
        let mut entity = Self::new(schema);
        for (key, value) in data {
            if RESERVED_PROPERTIES.contains(&key.as_str()) {
                return Err(ValidationError::ReservedProperty { name: key });
            }
            entity.data.insert(key, value);
        }
        Ok(entity)
    }

    /// [`from_object`](Entity::from_object), returning the entity already
    /// wrapped in its write-validating handle.
    pub fn from_object_guarded(
        data: Map<String, Value>,
        schema: Schema,
    ) -> Result<GuardedEntity, ValidationError> {
        Ok(Self::from_object(data, schema)?.into_guarded())
    }

    /// The governing schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// A shareable handle on the governing schema.
    pub fn schema_handle(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    /// Read a property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Write a property directly, without validation.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.data.insert(name.into(), value);
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.data.remove(name)
    }

    /// The entity's data fields. The schema is not part of this mapping.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Number of data fields currently set.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no data fields are set.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Wrap this entity so every future write is validated before it
    /// commits. See [`GuardedEntity`].
    pub fn into_guarded(self) -> GuardedEntity {
        GuardedEntity::new(self)
    }
}

/// Serializes the data fields only. The schema is implementation state
/// and must never round-trip with the entity.
impl Serialize for Entity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.data.len()))?;
        for (key, value) in &self.data {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
