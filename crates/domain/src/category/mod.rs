//! Category aggregate and related types.

mod aggregate;
mod gateway;
mod validator;

pub use aggregate::Category;
pub use gateway::CategoryGateway;
pub use validator::CategoryValidator;

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Unique identifier for a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl Identifier for CategoryId {
    fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
