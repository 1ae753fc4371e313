use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    AggregateRoot, CategoryGateway, DomainError, Genre, GenreGateway, GenreId, Identifier,
    Notification, ValidationHandler,
};
use serde::Serialize;

use super::{to_category_ids, validate_categories};
use crate::telemetry::{record_mutation, reject};
use crate::{Result, UseCase};

/// Command to replace a genre's fields and category links.
#[derive(Debug, Clone)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl UpdateGenreCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        is_active: bool,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active,
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateGenreOutput {
    pub id: String,
}

impl From<&Genre> for UpdateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().value().to_string(),
        }
    }
}

pub struct UpdateGenreUseCase {
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
}

impl UpdateGenreUseCase {
    pub fn new(
        category_gateway: Arc<dyn CategoryGateway>,
        genre_gateway: Arc<dyn GenreGateway>,
    ) -> Self {
        Self {
            category_gateway,
            genre_gateway,
        }
    }
}

#[async_trait]
impl UseCase for UpdateGenreUseCase {
    type Input = UpdateGenreCommand;
    type Output = UpdateGenreOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, command: UpdateGenreCommand) -> Result<UpdateGenreOutput> {
        let id = GenreId::from_string(command.id);
        let mut genre = self
            .genre_gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Genre::aggregate_type(), &id))?;

        let categories = to_category_ids(&command.categories);

        let mut notification = Notification::create();
        notification.append_handler(
            &validate_categories(self.category_gateway.as_ref(), &categories).await?,
        )?;

        genre.update(command.name, command.is_active, categories);
        genre.validate(&mut notification)?;

        if notification.has_error() {
            return Err(reject(
                Genre::aggregate_type(),
                format!("Could not update Aggregate {} {id}", Genre::aggregate_type()),
                &notification,
            ));
        }

        let genre = self.genre_gateway.update(genre).await?;
        record_mutation(Genre::aggregate_type(), "update");

        Ok(UpdateGenreOutput::from(&genre))
    }
}
