//! Gateways that always fail, for exercising infrastructure error paths, and a
//! scoped metrics recorder.

use std::future::Future;

use async_trait::async_trait;
use common::{Pagination, SearchQuery};
use domain::{
    CastMember, CastMemberGateway, CastMemberId, Category, CategoryGateway, CategoryId,
    GatewayError, Genre, GenreGateway, GenreId,
};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Drives `future` to completion under a thread-local Prometheus recorder and
/// returns its output with the rendered metrics.
pub(crate) fn with_metrics<F: Future>(future: F) -> (F::Output, String) {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let output = metrics::with_local_recorder(&recorder, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    });
    (output, handle.render())
}

pub(crate) struct FailingGateway;

fn failure() -> GatewayError {
    GatewayError::new(std::io::Error::other("storage unavailable"))
}

#[async_trait]
impl CategoryGateway for FailingGateway {
    async fn create(&self, _: Category) -> Result<Category, GatewayError> {
        Err(failure())
    }

    async fn update(&self, _: Category) -> Result<Category, GatewayError> {
        Err(failure())
    }

    async fn find_by_id(&self, _: &CategoryId) -> Result<Option<Category>, GatewayError> {
        Err(failure())
    }

    async fn delete_by_id(&self, _: &CategoryId) -> Result<bool, GatewayError> {
        Err(failure())
    }

    async fn find_all(&self, _: &SearchQuery) -> Result<Pagination<Category>, GatewayError> {
        Err(failure())
    }

    async fn exists_by_ids(&self, _: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError> {
        Err(failure())
    }
}

#[async_trait]
impl GenreGateway for FailingGateway {
    async fn create(&self, _: Genre) -> Result<Genre, GatewayError> {
        Err(failure())
    }

    async fn update(&self, _: Genre) -> Result<Genre, GatewayError> {
        Err(failure())
    }

    async fn find_by_id(&self, _: &GenreId) -> Result<Option<Genre>, GatewayError> {
        Err(failure())
    }

    async fn delete_by_id(&self, _: &GenreId) -> Result<bool, GatewayError> {
        Err(failure())
    }

    async fn find_all(&self, _: &SearchQuery) -> Result<Pagination<Genre>, GatewayError> {
        Err(failure())
    }
}

#[async_trait]
impl CastMemberGateway for FailingGateway {
    async fn create(&self, _: CastMember) -> Result<CastMember, GatewayError> {
        Err(failure())
    }

    async fn update(&self, _: CastMember) -> Result<CastMember, GatewayError> {
        Err(failure())
    }

    async fn find_by_id(&self, _: &CastMemberId) -> Result<Option<CastMember>, GatewayError> {
        Err(failure())
    }

    async fn delete_by_id(&self, _: &CastMemberId) -> Result<bool, GatewayError> {
        Err(failure())
    }

    async fn find_all(&self, _: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError> {
        Err(failure())
    }
}
