use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    AggregateRoot, Category, CategoryGateway, CategoryId, DomainError, Identifier, Notification,
    ValidationHandler,
};
use serde::Serialize;

use crate::telemetry::{record_mutation, reject};
use crate::{Result, UseCase};

/// Command to replace a category's fields.
#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description,
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: String,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().value().to_string(),
        }
    }
}

pub struct UpdateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl UpdateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for UpdateCategoryUseCase {
    type Input = UpdateCategoryCommand;
    type Output = UpdateCategoryOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, command: UpdateCategoryCommand) -> Result<UpdateCategoryOutput> {
        let id = CategoryId::from_string(command.id);
        let mut category = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(Category::aggregate_type(), &id))?;

        category.update(command.name, command.description, command.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification)?;
        if notification.has_error() {
            return Err(reject(
                Category::aggregate_type(),
                format!("Could not update Aggregate {} {id}", Category::aggregate_type()),
                &notification,
            ));
        }

        let category = self.gateway.update(category).await?;
        record_mutation(Category::aggregate_type(), "update");

        Ok(UpdateCategoryOutput::from(&category))
    }
}
