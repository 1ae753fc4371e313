//! Genre aggregate and related types.

mod aggregate;
mod gateway;
mod validator;

pub use aggregate::Genre;
pub use gateway::GenreGateway;
pub use validator::GenreValidator;

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Unique identifier for a genre.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(String);

impl Identifier for GenreId {
    fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GenreId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
