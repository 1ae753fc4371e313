use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    AggregateRoot, CastMember, CastMemberGateway, CastMemberId, CastMemberType, DomainError,
    Identifier, Notification, ValidationHandler,
};
use serde::Serialize;

use crate::telemetry::{record_mutation, reject};
use crate::{Result, UseCase};

/// Command to replace a cast member's fields.
#[derive(Debug, Clone)]
pub struct UpdateCastMemberCommand {
    pub id: String,
    pub name: String,
    pub kind: Option<CastMemberType>,
}

impl UpdateCastMemberCommand {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: Option<CastMemberType>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCastMemberOutput {
    pub id: String,
}

impl From<&CastMember> for UpdateCastMemberOutput {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id().value().to_string(),
        }
    }
}

pub struct UpdateCastMemberUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl UpdateCastMemberUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for UpdateCastMemberUseCase {
    type Input = UpdateCastMemberCommand;
    type Output = UpdateCastMemberOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, command: UpdateCastMemberCommand) -> Result<UpdateCastMemberOutput> {
        let id = CastMemberId::from_string(command.id);
        let mut member = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(CastMember::aggregate_type(), &id))?;

        let mut notification = Notification::create();
        notification.validate(|| member.update(command.name, command.kind).map(|_| ()))?;

        if notification.has_error() {
            return Err(reject(
                CastMember::aggregate_type(),
                format!(
                    "Could not update Aggregate {} {id}",
                    CastMember::aggregate_type()
                ),
                &notification,
            ));
        }

        let member = self.gateway.update(member).await?;
        record_mutation(CastMember::aggregate_type(), "update");

        Ok(UpdateCastMemberOutput::from(&member))
    }
}
