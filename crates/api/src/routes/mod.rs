//! HTTP handlers and the state they share.

pub mod cast_members;
pub mod categories;
pub mod genres;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use common::{Direction, SearchQuery};
use domain::{CastMemberGateway, CategoryGateway, GenreGateway};
use infrastructure::{
    InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway,
    PostgresCastMemberGateway, PostgresCategoryGateway, PostgresGenreGateway,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
///
/// Handlers build the use case they need from these gateways per request.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryGateway>,
    pub genres: Arc<dyn GenreGateway>,
    pub cast_members: Arc<dyn CastMemberGateway>,
}

impl AppState {
    /// State backed by in-memory gateways.
    pub fn in_memory() -> Self {
        let genres = InMemoryGenreGateway::new();
        Self {
            categories: Arc::new(InMemoryCategoryGateway::with_genres(genres.clone())),
            genres: Arc::new(genres),
            cast_members: Arc::new(InMemoryCastMemberGateway::new()),
        }
    }

    /// State backed by PostgreSQL gateways sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            categories: Arc::new(PostgresCategoryGateway::new(pool.clone())),
            genres: Arc::new(PostgresGenreGateway::new(pool.clone())),
            cast_members: Arc::new(PostgresCastMemberGateway::new(pool)),
        }
    }
}

/// Query string accepted by every list endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl ListParams {
    /// Converts the query string into a [`SearchQuery`], filling in defaults.
    pub fn into_query(self) -> Result<SearchQuery, ApiError> {
        let defaults = SearchQuery::default();
        let direction = match self.dir {
            Some(dir) => dir.parse::<Direction>().map_err(ApiError::BadRequest)?,
            None => defaults.direction,
        };

        Ok(SearchQuery::new(
            self.page.unwrap_or(defaults.page),
            self.per_page.unwrap_or(defaults.per_page),
            self.search.unwrap_or(defaults.terms),
            self.sort.unwrap_or(defaults.sort),
            direction,
        ))
    }
}
