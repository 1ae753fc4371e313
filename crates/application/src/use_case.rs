use async_trait::async_trait;

use crate::Result;

/// A single application operation.
///
/// Each use case owns the gateways it needs and is invoked once per request.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output: Send;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output>;
}
