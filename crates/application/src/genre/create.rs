use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    AggregateRoot, CategoryGateway, Genre, GenreGateway, Identifier, Notification,
    ValidationHandler,
};
use serde::Serialize;

use super::{to_category_ids, validate_categories};
use crate::telemetry::{record_mutation, reject};
use crate::{Result, UseCase};

/// Command to create a genre linked to existing categories.
#[derive(Debug, Clone)]
pub struct CreateGenreCommand {
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl CreateGenreCommand {
    pub fn new(name: impl Into<String>, is_active: bool, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            is_active,
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGenreOutput {
    pub id: String,
}

impl From<&Genre> for CreateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().value().to_string(),
        }
    }
}

/// Creates a genre after checking its category references and its fields.
///
/// Both checks write into one notification, so a rejection lists the missing
/// categories first and the field errors after them.
pub struct CreateGenreUseCase {
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
}

impl CreateGenreUseCase {
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
impl UseCase for CreateGenreUseCase {
    type Input = CreateGenreCommand;
    type Output = CreateGenreOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, command: CreateGenreCommand) -> Result<CreateGenreOutput> {
        let categories = to_category_ids(&command.categories);

        let mut notification = Notification::create();
        notification.append_handler(
            &validate_categories(self.category_gateway.as_ref(), &categories).await?,
        )?;

        let mut genre = Genre::new_genre(command.name, command.is_active);
        genre.validate(&mut notification)?;

        if notification.has_error() {
            return Err(reject(
                Genre::aggregate_type(),
                format!("Could not create Aggregate {}", Genre::aggregate_type()),
                &notification,
            ));
        }

        genre.add_categories(categories);

        let genre = self.genre_gateway.create(genre).await?;
        record_mutation(Genre::aggregate_type(), "create");
        tracing::info!(id = %genre.id(), categories = genre.categories().len(), "genre created");

        Ok(CreateGenreOutput::from(&genre))
    }
}
