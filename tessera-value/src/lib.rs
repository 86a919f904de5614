//! Tessera Value - Dynamically-typed value model
//!
//! This crate provides the document model built on top of the coercion
//! layer in `tessera-core`:
//! - `Value`: the tagged node (Null, Bool, Number, Text, Map, List)
//! - `ValueMap`: insertion-ordered string-keyed container
//! - `ValueList`: ordered sequence container
//!
//! Construction is total: `Value::of` accepts anything convertible into
//! `Native` and cannot fail. Coercion is where errors live, and those
//! surface as `Result<Option<T>, CoercionError>` on the typed getters so
//! that "logical null" and "wrong type" stay distinguishable.

mod list;
mod map;
mod value;

pub use list::ValueList;
pub use map::ValueMap;
pub use value::Value;

// Re-export the coercion layer so downstream crates need only one import.
pub use tessera_core::{targets, CoercionError, DBig, IBig, Native, Number};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CoercionError, Native, Number, Value, ValueList, ValueMap};
}
