use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{AggregateRoot, Category, CategoryGateway, CategoryId, DomainError, Identifier};
use serde::Serialize;

use crate::{Result, UseCase};

/// Full projection of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().value().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

pub struct GetCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl GetCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for GetCategoryUseCase {
    type Input = String;
    type Output = CategoryOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, id: String) -> Result<CategoryOutput> {
        let id = CategoryId::from_string(id);
        let category = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Category::aggregate_type(), &id))?;

        Ok(CategoryOutput::from(&category))
    }
}
