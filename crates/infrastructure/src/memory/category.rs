use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{Pagination, SearchQuery};
use domain::{AggregateRoot, Category, CategoryGateway, CategoryId, GatewayError};
use tokio::sync::RwLock;

use super::InMemoryGenreGateway;
use crate::search::search;

/// In-memory category storage.
///
/// When built with [`InMemoryCategoryGateway::with_genres`], deleting a category
/// also drops it from the linked genres, like the `ON DELETE CASCADE` on
/// `genres_categories`.
#[derive(Clone, Default)]
pub struct InMemoryCategoryGateway {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
    genres: Option<InMemoryGenreGateway>,
}

impl InMemoryCategoryGateway {
    /// Creates a new empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty gateway that unlinks deleted categories from `genres`.
    pub fn with_genres(genres: InMemoryGenreGateway) -> Self {
        Self {
            categories: Arc::default(),
            genres: Some(genres),
        }
    }

    /// Returns the number of stored categories.
    pub async fn count(&self) -> usize {
        self.categories.read().await.len()
    }

    /// Removes every stored category.
    pub async fn clear(&self) {
        self.categories.write().await.clear();
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: Category) -> Result<Category, GatewayError> {
        self.categories
            .write()
            .await
            .insert(category.id().clone(), category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, GatewayError> {
        self.categories
            .write()
            .await
            .insert(category.id().clone(), category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        Ok(self.categories.read().await.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<bool, GatewayError> {
        let removed = self.categories.write().await.remove(id).is_some();
        if let (true, Some(genres)) = (removed, &self.genres) {
            genres.unlink_category(id).await;
        }
        Ok(removed)
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError> {
        let categories = self.categories.read().await;
        Ok(search(categories.values(), query))
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError> {
        let categories = self.categories.read().await;
        Ok(ids
            .iter()
            .filter(|id| categories.contains_key(*id))
            .cloned()
            .collect())
    }
}
