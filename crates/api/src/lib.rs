//! HTTP API server with observability for the catalog admin service.
//!
//! Provides REST endpoints for categories, genres and cast members,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use infrastructure::{StorageError, run_migrations};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/categories",
            get(routes::categories::list).post(routes::categories::create),
        )
        .route(
            "/categories/{id}",
            get(routes::categories::get)
                .put(routes::categories::update)
                .delete(routes::categories::delete),
        )
        .route(
            "/genres",
            get(routes::genres::list).post(routes::genres::create),
        )
        .route(
            "/genres/{id}",
            get(routes::genres::get)
                .put(routes::genres::update)
                .delete(routes::genres::delete),
        )
        .route(
            "/cast_members",
            get(routes::cast_members::list).post(routes::cast_members::create),
        )
        .route(
            "/cast_members/{id}",
            get(routes::cast_members::get)
                .put(routes::cast_members::update)
                .delete(routes::cast_members::delete),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by in-memory gateways.
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState::in_memory())
}

/// Creates application state for `config`.
///
/// Connects to PostgreSQL and applies migrations when a database URL is
/// configured; otherwise falls back to in-memory storage.
pub async fn create_state(config: &Config) -> Result<Arc<AppState>, StorageError> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::info!("DATABASE_URL not set, using in-memory storage");
        return Ok(create_default_state());
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(url)
        .await?;
    run_migrations(&pool).await?;
    tracing::info!(
        max_connections = config.database_max_connections,
        "connected to PostgreSQL"
    );

    Ok(Arc::new(AppState::postgres(pool)))
}
