//! Aggregate identifiers.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use uuid::Uuid;

/// Unique, immutable key of an aggregate.
///
/// Equality is by value. New identifiers are lowercase UUID v4 renderings;
/// persisted ones are rebuilt with [`Identifier::from_string`].
pub trait Identifier: Clone + Eq + Hash + Debug + Display + Send + Sync {
    /// Rebuilds an identifier from its stored value.
    fn from_string(value: impl Into<String>) -> Self;

    /// Returns the underlying value.
    fn value(&self) -> &str;

    /// Allocates a fresh identifier.
    fn unique() -> Self {
        Self::from_string(Uuid::new_v4().to_string().to_lowercase())
    }
}
