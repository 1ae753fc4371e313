use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{Pagination, SearchQuery};
use domain::{AggregateRoot, Genre, GenreGateway, Identifier};
use serde::Serialize;

use crate::{Result, UseCase};

/// List projection of a genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreListOutput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreListOutput {
    fn from(genre: Genre) -> Self {
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
            deleted_at: genre.deleted_at(),
        }
    }
}

pub struct ListGenresUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl ListGenresUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for ListGenresUseCase {
    type Input = SearchQuery;
    type Output = Pagination<GenreListOutput>;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, query: SearchQuery) -> Result<Pagination<GenreListOutput>> {
        Ok(self.gateway.find_all(&query).await?.map(GenreListOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use common::Direction;
    use infrastructure::InMemoryGenreGateway;

    use super::*;
    use crate::ApplicationError;
    use crate::testing::FailingGateway;

    #[tokio::test]
    async fn filters_by_terms() {
        let gateway = InMemoryGenreGateway::new();
        for name in ["Action", "Drama", "Melodrama"] {
            gateway.create(Genre::new_genre(name, true)).await.unwrap();
        }
        let use_case = ListGenresUseCase::new(Arc::new(gateway));

        let page = use_case
            .execute(SearchQuery::new(0, 10, "drama", "name", Direction::Desc))
            .await
            .unwrap();

        let names: Vec<_> = page.items.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(page.total, 2);
        assert_eq!(names, ["Melodrama", "Drama"]);
    }

    #[tokio::test]
    async fn propagates_gateway_failure() {
        let use_case = ListGenresUseCase::new(Arc::new(FailingGateway));

        let err = use_case.execute(SearchQuery::default()).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Gateway(_)));
    }
}
