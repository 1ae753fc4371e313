//! Storage contract for cast members.

use async_trait::async_trait;
use common::{Pagination, SearchQuery};

use crate::error::GatewayError;

use super::{CastMember, CastMemberId};

/// Storage for [`CastMember`] aggregates.
#[async_trait]
pub trait CastMemberGateway: Send + Sync {
    async fn create(&self, member: CastMember) -> Result<CastMember, GatewayError>;

    async fn update(&self, member: CastMember) -> Result<CastMember, GatewayError>;

    async fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError>;

    /// Removes a cast member. Removing an unknown identifier is not an error.
    /// Returns whether anything was removed.
    async fn delete_by_id(&self, id: &CastMemberId) -> Result<bool, GatewayError>;

    async fn find_all(&self, query: &SearchQuery)
    -> Result<Pagination<CastMember>, GatewayError>;
}
