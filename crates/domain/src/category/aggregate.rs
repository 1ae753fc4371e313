//! Category aggregate implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::{ActivationStatus, AggregateRoot, now, touch};
use crate::error::DomainError;
use crate::identifier::Identifier;
use crate::validation::{ValidationHandler, Validator};

use super::{CategoryId, CategoryValidator};

/// Category aggregate root.
///
/// A category is not validated when built; use cases call
/// [`AggregateRoot::validate`] before persisting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    status: ActivationStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn aggregate_type() -> &'static str {
        "Category"
    }

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        CategoryValidator::new(self, handler).validate()
    }
}

// Construction
impl Category {
    /// Creates a new category with a fresh identifier.
    pub fn new_category(
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        let now = now();
        Self {
            id: CategoryId::unique(),
            name: name.into(),
            description,
            status: ActivationStatus::from_flag(is_active, now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a category from stored state.
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        status: ActivationStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            status,
            created_at,
            updated_at,
        }
    }
}

// Query methods
impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> ActivationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.status.deleted_at()
    }
}

// Mutations
impl Category {
    /// Replaces the editable fields. Does not validate.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> &mut Self {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.into();
        self.description = description;
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.status = self.status.activate();
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        let at = touch(self.updated_at);
        self.status = self.status.deactivate(at);
        self.updated_at = at;
        self
    }
}
