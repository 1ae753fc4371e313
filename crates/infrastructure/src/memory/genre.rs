use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{Pagination, SearchQuery};
use domain::{AggregateRoot, CategoryId, GatewayError, Genre, GenreGateway, GenreId};
use tokio::sync::RwLock;

use crate::search::search;

/// In-memory genre storage.
#[derive(Clone, Default)]
pub struct InMemoryGenreGateway {
    genres: Arc<RwLock<HashMap<GenreId, Genre>>>,
}

impl InMemoryGenreGateway {
    /// Creates a new empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored genres.
    pub async fn count(&self) -> usize {
        self.genres.read().await.len()
    }

    /// Removes every stored genre.
    pub async fn clear(&self) {
        self.genres.write().await.clear();
    }

    /// Drops `category_id` from every stored genre, leaving `updated_at` as is.
    pub async fn unlink_category(&self, category_id: &CategoryId) {
        let mut genres = self.genres.write().await;
        for genre in genres.values_mut() {
            if !genre.categories().contains(category_id) {
                continue;
            }
            let categories = genre
                .categories()
                .iter()
                .filter(|id| *id != category_id)
                .cloned()
                .collect();
            *genre = Genre::with(
                genre.id().clone(),
                genre.name(),
                genre.status(),
                categories,
                genre.created_at(),
                genre.updated_at(),
            );
        }
    }
}

#[async_trait]
impl GenreGateway for InMemoryGenreGateway {
    async fn create(&self, genre: Genre) -> Result<Genre, GatewayError> {
        self.genres
            .write()
            .await
            .insert(genre.id().clone(), genre.clone());
        Ok(genre)
    }

    async fn update(&self, genre: Genre) -> Result<Genre, GatewayError> {
        self.genres
            .write()
            .await
            .insert(genre.id().clone(), genre.clone());
        Ok(genre)
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError> {
        Ok(self.genres.read().await.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &GenreId) -> Result<bool, GatewayError> {
        Ok(self.genres.write().await.remove(id).is_some())
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError> {
        let genres = self.genres.read().await;
        Ok(search(genres.values(), query))
    }
}
