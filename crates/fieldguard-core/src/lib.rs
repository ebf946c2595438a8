//! # fieldguard-core — Foundational Types for fieldguard
//!
//! Defines the per-property validation contract consumed by the
//! `fieldguard` engine crate: the [`FieldRule`] capability, the
//! [`ValidationError`] hierarchy, and a small standard library of rule
//! validators.
//!
//! ## Key Design Principles
//!
//! 1. **Rules are capabilities, not configuration.** A [`FieldRule`]
//!    carries its own validator callback; the engine invokes it blindly
//!    and propagates whatever it returns. The engine never inspects or
//!    reinterprets a rule failure.
//!
//! 2. **Rules are stateless and shareable.** `FieldRule` is `Clone` and
//!    its callback is `Arc<dyn Fn .. + Send + Sync>`, so one rule can
//!    govern the same-named property on any number of schemas.
//!
//! 3. **Structured errors.** Every failure is a [`ValidationError`]
//!    variant naming the property it concerns; callers branch on the
//!    variant rather than parsing messages.
//!
//! ## Crate Policy
//!
//! - No dependencies on other fieldguard crates (this is the leaf of the
//!   DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod field;
pub mod rules;

// Re-export primary types for ergonomic imports.
pub use error::ValidationError;
pub use field::{FieldRule, FieldValidator};
