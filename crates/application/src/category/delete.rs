use std::sync::Arc;

use async_trait::async_trait;
use domain::{AggregateRoot, Category, CategoryGateway, CategoryId, Identifier};

use crate::telemetry::record_mutation;
use crate::{Result, UseCase};

/// Removes a category by identifier. Unknown identifiers are ignored.
pub struct DeleteCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DeleteCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for DeleteCategoryUseCase {
    type Input = String;
    type Output = ();

    #[tracing::instrument(skip(self))]
    async fn execute(&self, id: String) -> Result<()> {
        let removed = self
            .gateway
            .delete_by_id(&CategoryId::from_string(id))
            .await?;
        if removed {
            record_mutation(Category::aggregate_type(), "delete");
        }
        Ok(())
    }
}
