//! Aggregate root trait and lifecycle state shared by aggregates.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::identifier::Identifier;
use crate::validation::ValidationHandler;

/// Current time truncated to microseconds, the precision storage keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Trait for top-level domain entities.
///
/// An aggregate is identified by an [`Identifier`] and is mutated only through
/// its own intention-revealing operations. It checks its field-level
/// invariants through [`AggregateRoot::validate`], writing every failure into
/// the handler it is given rather than returning early on its own.
pub trait AggregateRoot: Send + Sync {
    /// The identifier type of this aggregate.
    type Id: Identifier;

    /// Returns the aggregate type name.
    ///
    /// Used in not-found messages and metrics labels.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's unique identifier.
    fn id(&self) -> &Self::Id;

    /// Runs this aggregate's validator against `handler`.
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError>;
}

/// Soft-delete state of an aggregate.
///
/// ```text
/// Active ──deactivate──► Inactive { since }
///   ▲                          │
///   └────────activate──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ActivationStatus {
    Active,
    Inactive { since: DateTime<Utc> },
}

impl ActivationStatus {
    /// Builds the state for an `is_active` flag evaluated at `at`.
    pub fn from_flag(is_active: bool, at: DateTime<Utc>) -> Self {
        if is_active {
            ActivationStatus::Active
        } else {
            ActivationStatus::Inactive { since: at }
        }
    }

    /// Rebuilds the state from a stored deletion timestamp.
    pub fn from_deleted_at(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            None => ActivationStatus::Active,
            Some(since) => ActivationStatus::Inactive { since },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActivationStatus::Active)
    }

    /// The deletion timestamp; `None` iff active.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            ActivationStatus::Active => None,
            ActivationStatus::Inactive { since } => Some(*since),
        }
    }

    pub fn activate(self) -> Self {
        ActivationStatus::Active
    }

    /// Keeps the original timestamp when already inactive.
    pub fn deactivate(self, at: DateTime<Utc>) -> Self {
        match self {
            ActivationStatus::Active => ActivationStatus::Inactive { since: at },
            inactive @ ActivationStatus::Inactive { .. } => inactive,
        }
    }
}

/// Returns the next `updated_at` value, never earlier than `previous`.
pub(crate) fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn now_has_microsecond_precision() {
        let t = now();
        assert_eq!(t.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn from_flag_matches_deleted_at() {
        let at = now();
        assert_eq!(ActivationStatus::from_flag(true, at).deleted_at(), None);
        assert_eq!(ActivationStatus::from_flag(false, at).deleted_at(), Some(at));
    }

    #[test]
    fn deactivate_is_idempotent() {
        let first = now();
        let later = first + Duration::seconds(5);

        let status = ActivationStatus::Active.deactivate(first).deactivate(later);

        assert_eq!(status, ActivationStatus::Inactive { since: first });
        assert!(!status.is_active());
    }

    #[test]
    fn activate_clears_deleted_at() {
        let status = ActivationStatus::Inactive { since: now() }.activate();
        assert!(status.is_active());
        assert_eq!(status.deleted_at(), None);
    }

    #[test]
    fn from_deleted_at_roundtrip() {
        let at = now();
        let status = ActivationStatus::from_deleted_at(Some(at));
        assert_eq!(status.deleted_at(), Some(at));
        assert!(ActivationStatus::from_deleted_at(None).is_active());
    }

    #[test]
    fn touch_never_goes_backwards() {
        let future = now() + Duration::hours(1);
        assert_eq!(touch(future), future);
    }
}
