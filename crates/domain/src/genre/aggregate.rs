//! Genre aggregate implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::{ActivationStatus, AggregateRoot, now, touch};
use crate::category::CategoryId;
use crate::error::DomainError;
use crate::identifier::Identifier;
use crate::validation::{ValidationHandler, Validator};

use super::{GenreId, GenreValidator};

/// Genre aggregate root.
///
/// A genre references categories by identifier only. Whether those
/// categories exist is checked by use cases, not by the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    id: GenreId,
    name: String,
    status: ActivationStatus,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AggregateRoot for Genre {
    type Id = GenreId;

    fn aggregate_type() -> &'static str {
        "Genre"
    }

    fn id(&self) -> &GenreId {
        &self.id
    }

    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        GenreValidator::new(self, handler).validate()
    }
}

impl Genre {
    /// Creates a new genre with no categories.
    pub fn new_genre(name: impl Into<String>, is_active: bool) -> Self {
        let now = now();
        Self {
            id: GenreId::unique(),
            name: name.into(),
            status: ActivationStatus::from_flag(is_active, now),
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a genre from stored state.
    pub fn with(
        id: GenreId,
        name: impl Into<String>,
        status: ActivationStatus,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            categories,
            created_at,
            updated_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ActivationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
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

    /// Replaces name, activation and the whole category list. Does not validate.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        is_active: bool,
        categories: Vec<CategoryId>,
    ) -> &mut Self {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.into();
        self.categories.clear();
        self.push_unique(categories);
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

    pub fn add_category(&mut self, category_id: CategoryId) -> &mut Self {
        self.add_categories(vec![category_id])
    }

    /// Appends categories not already referenced. An empty list changes nothing.
    pub fn add_categories(&mut self, category_ids: Vec<CategoryId>) -> &mut Self {
        if category_ids.is_empty() {
            return self;
        }
        self.push_unique(category_ids);
        self.updated_at = touch(self.updated_at);
        self
    }

    pub fn remove_category(&mut self, category_id: &CategoryId) -> &mut Self {
        let before = self.categories.len();
        self.categories.retain(|id| id != category_id);
        if self.categories.len() != before {
            self.updated_at = touch(self.updated_at);
        }
        self
    }

    fn push_unique(&mut self, category_ids: Vec<CategoryId>) {
        for id in category_ids {
            if !self.categories.contains(&id) {
                self.categories.push(id);
            }
        }
    }
}
