use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    AggregateRoot, CastMember, CastMemberGateway, CastMemberId, CastMemberType, DomainError,
    Identifier,
};
use serde::Serialize;

use crate::{Result, UseCase};

/// Full projection of a cast member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMemberOutput {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<CastMemberType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&CastMember> for CastMemberOutput {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id().value().to_string(),
            name: member.name().to_string(),
            kind: member.kind(),
            created_at: member.created_at(),
            updated_at: member.updated_at(),
        }
    }
}

pub struct GetCastMemberUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl GetCastMemberUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for GetCastMemberUseCase {
    type Input = String;
    type Output = CastMemberOutput;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, id: String) -> Result<CastMemberOutput> {
        let id = CastMemberId::from_string(id);
        let member = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(CastMember::aggregate_type(), &id))?;

        Ok(CastMemberOutput::from(&member))
    }
}

#[cfg(test)]
mod tests {
    use infrastructure::InMemoryCastMemberGateway;

    use super::*;

    #[tokio::test]
    async fn serializes_kind_as_type() {
        let gateway = InMemoryCastMemberGateway::new();
        let member = gateway
            .create(CastMember::new_member("Keanu Reeves", Some(CastMemberType::Actor)).unwrap())
            .await
            .unwrap();
        let use_case = GetCastMemberUseCase::new(Arc::new(gateway));

        let output = use_case
            .execute(member.id().value().to_string())
            .await
            .unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["type"], "ACTOR");
        assert_eq!(json["name"], "Keanu Reeves");
    }

    #[tokio::test]
    async fn missing_member_is_not_found() {
        let use_case = GetCastMemberUseCase::new(Arc::new(InMemoryCastMemberGateway::new()));

        let err = use_case.execute("abc".to_string()).await.unwrap_err();

        assert!(err.is_not_found());
    }
}
