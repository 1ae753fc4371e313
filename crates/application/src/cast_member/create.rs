use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    AggregateRoot, CastMember, CastMemberGateway, CastMemberType, Identifier, Notification,
    ValidationHandler,
};
use serde::Serialize;

use crate::telemetry::{record_mutation, reject};
use crate::{Result, UseCase};

/// Command to create a cast member.
#[derive(Debug, Clone)]
pub struct CreateCastMemberCommand {
    pub name: String,
    pub kind: Option<CastMemberType>,
}

impl CreateCastMemberCommand {
    pub fn new(name: impl Into<String>, kind: Option<CastMemberType>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCastMemberOutput {
    pub id: String,
}

impl From<&CastMember> for CreateCastMemberOutput {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id().value().to_string(),
        }
    }
}

/// Creates a cast member.
///
/// Construction validates the member itself; its failure is folded into the
/// notification instead of being returned as is.
pub struct CreateCastMemberUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl CreateCastMemberUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for CreateCastMemberUseCase {
    type Input = CreateCastMemberCommand;
    type Output = CreateCastMemberOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, command: CreateCastMemberCommand) -> Result<CreateCastMemberOutput> {
        let mut notification = Notification::create();
        let member = notification.validate(|| CastMember::new_member(command.name, command.kind))?;

        let member = match member {
            Some(member) if !notification.has_error() => member,
            _ => {
                return Err(reject(
                    CastMember::aggregate_type(),
                    format!("Could not create Aggregate {}", CastMember::aggregate_type()),
                    &notification,
                ));
            }
        };

        let member = self.gateway.create(member).await?;
        record_mutation(CastMember::aggregate_type(), "create");
        tracing::info!(id = %member.id(), "cast member created");

        Ok(CreateCastMemberOutput::from(&member))
    }
}

#[cfg(test)]
mod tests {
    use domain::CastMemberId;
    use infrastructure::InMemoryCastMemberGateway;

    use super::*;

    #[tokio::test]
    async fn creates_valid_member() {
        let gateway = InMemoryCastMemberGateway::new();
        let use_case = CreateCastMemberUseCase::new(Arc::new(gateway.clone()));

        let output = use_case
            .execute(CreateCastMemberCommand::new(
                "Keanu Reeves",
                Some(CastMemberType::Actor),
            ))
            .await
            .unwrap();

        let stored = gateway
            .find_by_id(&CastMemberId::from(output.id.as_str()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name(), "Keanu Reeves");
        assert_eq!(stored.kind(), Some(CastMemberType::Actor));
    }

    #[tokio::test]
    async fn rejects_with_every_error() {
        let gateway = InMemoryCastMemberGateway::new();
        let use_case = CreateCastMemberUseCase::new(Arc::new(gateway.clone()));

        let err = use_case
            .execute(CreateCastMemberCommand::new("", None))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Could not create Aggregate CastMember");
        let messages: Vec<_> = err.errors().iter().map(|e| e.message()).collect();
        assert_eq!(
            messages,
            ["'name' should not be empty", "'type' should not be null"]
        );
        assert_eq!(gateway.count().await, 0);
    }

    #[tokio::test]
    async fn rejects_long_name() {
        let use_case = CreateCastMemberUseCase::new(Arc::new(InMemoryCastMemberGateway::new()));

        let err = use_case
            .execute(CreateCastMemberCommand::new(
                "a".repeat(256),
                Some(CastMemberType::Director),
            ))
            .await
            .unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(
            err.errors()[0].message(),
            "'name' must be between 3 and 255 characters"
        );
    }
}
