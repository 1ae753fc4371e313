use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{AggregateRoot, DomainError, Genre, GenreGateway, GenreId, Identifier};
use serde::Serialize;

use crate::{Result, UseCase};

/// Full projection of a genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().value().to_string(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
            categories: genre
                .categories()
                .iter()
                .map(|id| id.value().to_string())
                .collect(),
            created_at: genre.created_at(),
            updated_at: genre.updated_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}

pub struct GetGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl GetGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for GetGenreUseCase {
    type Input = String;
    type Output = GenreOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, id: String) -> Result<GenreOutput> {
        let id = GenreId::from_string(id);
        let genre = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Genre::aggregate_type(), &id))?;

        Ok(GenreOutput::from(&genre))
    }
}
