use std::sync::Arc;

use async_trait::async_trait;
use domain::{AggregateRoot, Category, CategoryGateway, Identifier, Notification, ValidationHandler};
use serde::Serialize;

use crate::telemetry::{record_mutation, reject};
use crate::{Result, UseCase};

/// Command to create a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: impl Into<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description,
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: String,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().value().to_string(),
        }
    }
}

/// Validates a new category and persists it only when it has no errors.
pub struct CreateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl CreateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for CreateCategoryUseCase {
    type Input = CreateCategoryCommand;
    type Output = CreateCategoryOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, command: CreateCategoryCommand) -> Result<CreateCategoryOutput> {
        let category =
            Category::new_category(command.name, command.description, command.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification)?;
        if notification.has_error() {
            return Err(reject(
                Category::aggregate_type(),
                format!("Could not create Aggregate {}", Category::aggregate_type()),
                &notification,
            ));
        }

        let category = self.gateway.create(category).await?;
        record_mutation(Category::aggregate_type(), "create");
        tracing::info!(id = %category.id(), "category created");

        Ok(CreateCategoryOutput::from(&category))
    }
}

#[cfg(test)]
mod tests {
    use domain::CategoryId;
    use infrastructure::InMemoryCategoryGateway;

    use super::*;
    use crate::ApplicationError;
    use crate::testing::FailingGateway;

    #[tokio::test]
    async fn creates_valid_category() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = CreateCategoryUseCase::new(Arc::new(gateway.clone()));

        let output = use_case
            .execute(CreateCategoryCommand::new(
                "Movies",
                Some("Most watched".into()),
                true,
            ))
            .await
            .unwrap();

        let stored = gateway
            .find_by_id(&CategoryId::from(output.id.as_str()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name(), "Movies");
        assert_eq!(stored.description(), Some("Most watched"));
        assert!(stored.is_active());
        assert_eq!(stored.created_at(), stored.updated_at());
    }

    #[tokio::test]
    async fn creates_inactive_category_with_deleted_at() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = CreateCategoryUseCase::new(Arc::new(gateway.clone()));

        let output = use_case
            .execute(CreateCategoryCommand::new("Movies", None, false))
            .await
            .unwrap();

        let stored = gateway
            .find_by_id(&CategoryId::from(output.id.as_str()))
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_active());
        assert!(stored.deleted_at().is_some());
    }

    #[tokio::test]
    async fn rejects_blank_name_without_persisting() {
        let gateway = InMemoryCategoryGateway::new();
        let use_case = CreateCategoryUseCase::new(Arc::new(gateway.clone()));

        let err = use_case
            .execute(CreateCategoryCommand::new("  ", None, true))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Could not create Aggregate Category");
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].message(), "'name' should not be empty");
        assert_eq!(gateway.count().await, 0);
    }

    #[tokio::test]
    async fn rejects_short_name() {
        let use_case = CreateCategoryUseCase::new(Arc::new(InMemoryCategoryGateway::new()));

        let err = use_case
            .execute(CreateCategoryCommand::new("Fi ", None, true))
            .await
            .unwrap_err();

        assert_eq!(
            err.errors()[0].message(),
            "'name' must be between 3 and 255 characters"
        );
    }

    #[tokio::test]
    async fn propagates_gateway_failure() {
        let use_case = CreateCategoryUseCase::new(Arc::new(FailingGateway));

        let err = use_case
            .execute(CreateCategoryCommand::new("Movies", None, true))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Gateway(_)));
    }
}
