use std::sync::Arc;

use async_trait::async_trait;
use domain::{AggregateRoot, Genre, GenreGateway, GenreId, Identifier};

use crate::telemetry::record_mutation;
use crate::{Result, UseCase};

/// Removes a genre and its category links. Unknown identifiers are ignored.
pub struct DeleteGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl DeleteGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for DeleteGenreUseCase {
    type Input = String;
    type Output = ();

    #[tracing::instrument(skip(self))]
    async fn execute(&self, id: String) -> Result<()> {
        let removed = self.gateway.delete_by_id(&GenreId::from_string(id)).await?;
        if removed {
            record_mutation(Genre::aggregate_type(), "delete");
        }
        Ok(())
    }
}
