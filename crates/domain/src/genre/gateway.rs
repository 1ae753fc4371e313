//! Storage contract for genres.

use async_trait::async_trait;
use common::{Pagination, SearchQuery};

use crate::error::GatewayError;

use super::{Genre, GenreId};

/// Storage for [`Genre`] aggregates, including their category links.
#[async_trait]
pub trait GenreGateway: Send + Sync {
    async fn create(&self, genre: Genre) -> Result<Genre, GatewayError>;

    async fn update(&self, genre: Genre) -> Result<Genre, GatewayError>;

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError>;

    /// Removes a genre. Removing an unknown identifier is not an error.
    /// Returns whether anything was removed.
    async fn delete_by_id(&self, id: &GenreId) -> Result<bool, GatewayError>;

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError>;
}
