use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{Pagination, SearchQuery};
use domain::{AggregateRoot, CastMember, CastMemberGateway, CastMemberType, Identifier};
use serde::Serialize;

use crate::{Result, UseCase};

/// List projection of a cast member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMemberListOutput {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<CastMemberType>,
    pub created_at: DateTime<Utc>,
}

impl From<CastMember> for CastMemberListOutput {
    fn from(member: CastMember) -> Self {
        Self {
            id: member.id().value().to_string(),
            name: member.name().to_string(),
            kind: member.kind(),
            created_at: member.created_at(),
        }
    }
}

pub struct ListCastMembersUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl ListCastMembersUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for ListCastMembersUseCase {
    type Input = SearchQuery;
    type Output = Pagination<CastMemberListOutput>;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, query: SearchQuery) -> Result<Pagination<CastMemberListOutput>> {
        Ok(self
            .gateway
            .find_all(&query)
            .await?
            .map(CastMemberListOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use common::Direction;
    use infrastructure::InMemoryCastMemberGateway;

    use super::*;

    #[tokio::test]
    async fn pages_members() {
        let gateway = InMemoryCastMemberGateway::new();
        for name in ["Keanu Reeves", "Carrie-Anne Moss", "Lana Wachowski"] {
            gateway
                .create(CastMember::new_member(name, Some(CastMemberType::Actor)).unwrap())
                .await
                .unwrap();
        }
        let use_case = ListCastMembersUseCase::new(Arc::new(gateway));

        let page = use_case
            .execute(SearchQuery::new(1, 2, "", "name", Direction::Asc))
            .await
            .unwrap();

        assert_eq!(page.current_page, 1);
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Lana Wachowski");
    }
}
