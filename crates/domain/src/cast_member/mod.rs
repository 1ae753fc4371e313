//! Cast member aggregate and related types.

mod aggregate;
mod gateway;
mod validator;

pub use aggregate::CastMember;
pub use gateway::CastMemberGateway;
pub use validator::CastMemberValidator;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Unique identifier for a cast member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CastMemberId(String);

impl Identifier for CastMemberId {
    fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CastMemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CastMemberId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Role a cast member plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CastMemberType {
    Actor,
    Director,
}

impl CastMemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CastMemberType::Actor => "ACTOR",
            CastMemberType::Director => "DIRECTOR",
        }
    }
}

impl std::fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CastMemberType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTOR" => Ok(CastMemberType::Actor),
            "DIRECTOR" => Ok(CastMemberType::Director),
            other => Err(format!("unknown cast member type: {other}")),
        }
    }
}
