//! # fieldguard — Runtime Field-Rule Validation for Plain Data Objects
//!
//! Given a declarative map of field rules, fieldguard checks an existing
//! object's properties against those rules on demand, and optionally
//! wraps the object so every future property write is validated before it
//! takes effect. Lightweight object invariants without a schema compiler.
//!
//! ## The Four Operations
//!
//! - **Construct** — [`Entity::new`] binds an empty object to a
//!   [`Schema`]; the schema lives alongside the data and never appears in
//!   the object's key set or its serialized form.
//! - **Bulk-validate** — [`Entity::validate`] checks every property the
//!   object currently holds, fail-fast, with policies for `Null` values
//!   and undeclared fields ([`ValidateOptions`]).
//! - **Guard** — [`Entity::into_guarded`] returns a [`GuardedEntity`]
//!   whose `set` runs the matching rule first; invalid writes never
//!   commit.
//! - **Factory** — [`Entity::from_object`] builds an entity from a plain
//!   object, refusing input keys that would shadow the entity's own
//!   method surface.
//!
//! ## Example
//!
//! ```
//! use fieldguard::{rules, Entity, Schema, ValidateOptions};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("firstName", rules::string(3.0, 50.0))
//!     .field("age", rules::number());
//!
//! let mut user = Entity::new(schema).into_guarded();
//! user.set("firstName", json!("Ada")).unwrap();
//! assert!(user.set("firstName", json!("x")).is_err());
//! assert_eq!(user.get("firstName"), Some(&json!("Ada")));
//!
//! user.validate(ValidateOptions::new()).unwrap();
//! ```
//!
//! ## Crate Policy
//!
//! - Fully synchronous, no I/O, no locking: each entity is exclusively
//!   owned and mutated through `&mut`.
//! - A failing rule aborts the current operation immediately; failures
//!   are propagated to the caller unchanged, never logged or retried.
//! - No `unsafe` code; no `panic!()` or `.unwrap()` outside tests.

pub mod entity;
pub mod guard;
pub mod schema;
pub mod validate;

pub use entity::Entity;
pub use guard::GuardedEntity;
pub use schema::Schema;
pub use validate::ValidateOptions;

// Re-export the rule contract so most users need only this crate.
pub use fieldguard_core::{rules, FieldRule, FieldValidator, ValidationError};
