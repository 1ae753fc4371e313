//! Storage contract for categories.

use async_trait::async_trait;
use common::{Pagination, SearchQuery};

use crate::error::GatewayError;

use super::{Category, CategoryId};

/// Storage for [`Category`] aggregates.
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Persists a new category and returns the stored form.
    async fn create(&self, category: Category) -> Result<Category, GatewayError>;

    /// Replaces a stored category and returns the stored form.
    async fn update(&self, category: Category) -> Result<Category, GatewayError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError>;

    /// Removes a category. Removing an unknown identifier is not an error.
    /// Returns whether anything was removed.
    async fn delete_by_id(&self, id: &CategoryId) -> Result<bool, GatewayError>;

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError>;

    /// Returns the subset of `ids` that exist.
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError>;
}
