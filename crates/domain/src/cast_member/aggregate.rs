//! Cast member aggregate implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateRoot, now, touch};
use crate::error::DomainError;
use crate::identifier::Identifier;
use crate::validation::{Notification, ValidationHandler, Validator};

use super::{CastMemberId, CastMemberType, CastMemberValidator};

/// Cast member aggregate root.
///
/// Unlike categories and genres, a cast member validates itself when it is
/// built and when it is updated, so an invalid one is never handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    id: CastMemberId,
    name: String,
    kind: Option<CastMemberType>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AggregateRoot for CastMember {
    type Id = CastMemberId;

    fn aggregate_type() -> &'static str {
        "CastMember"
    }

    fn id(&self) -> &CastMemberId {
        &self.id
    }

    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        CastMemberValidator::new(self, handler).validate()
    }
}

impl CastMember {
    /// Creates a new cast member, failing with every validation error found.
    pub fn new_member(
        name: impl Into<String>,
        kind: Option<CastMemberType>,
    ) -> Result<Self, DomainError> {
        let now = now();
        let member = Self {
            id: CastMemberId::unique(),
            name: name.into(),
            kind,
            created_at: now,
            updated_at: now,
        };
        member.self_validate("Failed to create a Aggregate CastMember")?;
        Ok(member)
    }

    /// Rebuilds a cast member from stored state without validating it.
    pub fn with(
        id: CastMemberId,
        name: impl Into<String>,
        kind: CastMemberType,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: Some(kind),
            created_at,
            updated_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always `Some` for a member that passed validation.
    pub fn kind(&self) -> Option<CastMemberType> {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the new fields, then validates them.
    ///
    /// On failure the member keeps the new (invalid) values; callers must not
    /// persist it.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        kind: Option<CastMemberType>,
    ) -> Result<&mut Self, DomainError> {
        self.name = name.into();
        self.kind = kind;
        self.updated_at = touch(self.updated_at);
        self.self_validate("Failed to update a Aggregate CastMember")?;
        Ok(self)
    }

    fn self_validate(&self, message: &str) -> Result<(), DomainError> {
        let mut notification = Notification::create();
        self.validate(&mut notification)?;
        if notification.has_error() {
            return Err(DomainError::validation(message, &notification));
        }
        Ok(())
    }
}
