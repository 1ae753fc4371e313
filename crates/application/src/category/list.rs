use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{Pagination, SearchQuery};
use domain::{AggregateRoot, Category, CategoryGateway, Identifier};
use serde::Serialize;

use crate::{Result, UseCase};

/// List projection of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().value().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

pub struct ListCategoriesUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl ListCategoriesUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for ListCategoriesUseCase {
    type Input = SearchQuery;
    type Output = Pagination<CategoryListOutput>;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, query: SearchQuery) -> Result<Pagination<CategoryListOutput>> {
        let page = self.gateway.find_all(&query).await?;
        Ok(page.map(CategoryListOutput::from))
    }
}
