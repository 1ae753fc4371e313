use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{Pagination, SearchQuery};
use domain::{AggregateRoot, CastMember, CastMemberGateway, CastMemberId, GatewayError};
use tokio::sync::RwLock;

use crate::search::search;

/// In-memory cast member storage.
#[derive(Clone, Default)]
pub struct InMemoryCastMemberGateway {
    members: Arc<RwLock<HashMap<CastMemberId, CastMember>>>,
}

impl InMemoryCastMemberGateway {
    /// Creates a new empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored cast members.
    pub async fn count(&self) -> usize {
        self.members.read().await.len()
    }

    /// Removes every stored cast member.
    pub async fn clear(&self) {
        self.members.write().await.clear();
    }
}

#[async_trait]
impl CastMemberGateway for InMemoryCastMemberGateway {
    async fn create(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        self.members
            .write()
            .await
            .insert(member.id().clone(), member.clone());
        Ok(member)
    }

    async fn update(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        self.members
            .write()
            .await
            .insert(member.id().clone(), member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError> {
        Ok(self.members.read().await.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &CastMemberId) -> Result<bool, GatewayError> {
        Ok(self.members.write().await.remove(id).is_some())
    }

    async fn find_all(
        &self,
        query: &SearchQuery,
    ) -> Result<Pagination<CastMember>, GatewayError> {
        let members = self.members.read().await;
        Ok(search(members.values(), query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Direction;
    use domain::CastMemberType;

    #[tokio::test]
    async fn find_all_pages_sorted_members() {
        let gateway = InMemoryCastMemberGateway::new();
        for name in ["Zoe Saldana", "Vin Diesel", "Quentin Tarantino"] {
            let member = CastMember::new_member(name, Some(CastMemberType::Actor)).unwrap();
            gateway.create(member).await.unwrap();
        }

        let query = SearchQuery::new(0, 2, "", "name", Direction::Asc);
        let page = gateway.find_all(&query).await.unwrap();

        assert_eq!(page.total, 3);
        let names: Vec<_> = page.items.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Quentin Tarantino", "Vin Diesel"]);
    }
}
