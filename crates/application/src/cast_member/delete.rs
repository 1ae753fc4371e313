use std::sync::Arc;

use async_trait::async_trait;
use domain::{AggregateRoot, CastMember, CastMemberGateway, CastMemberId, Identifier};

use crate::telemetry::record_mutation;
use crate::{Result, UseCase};

pub struct DeleteCastMemberUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl DeleteCastMemberUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for DeleteCastMemberUseCase {
    type Input = String;
    type Output = ();

    #[tracing::instrument(skip(self))]
    async fn execute(&self, id: String) -> Result<()> {
        let removed = self
            .gateway
            .delete_by_id(&CastMemberId::from_string(id))
            .await?;
        if removed {
            record_mutation(CastMember::aggregate_type(), "delete");
        }
        Ok(())
    }
}
