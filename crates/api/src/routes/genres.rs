//! Genre endpoints.

use std::sync::Arc;

use application::UseCase;
use application::genre::{
    CreateGenreCommand, CreateGenreOutput, CreateGenreUseCase, DeleteGenreUseCase,
    GenreListOutput, GenreOutput, GetGenreUseCase, ListGenresUseCase, UpdateGenreCommand,
    UpdateGenreOutput, UpdateGenreUseCase,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::Pagination;
use serde::Deserialize;

use super::{AppState, ListParams};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GenreRequest {
    #[serde(default)]
    pub name: String,
    pub is_active: Option<bool>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// POST /genres
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenreRequest>,
) -> Result<(StatusCode, Json<CreateGenreOutput>), ApiError> {
    let output = CreateGenreUseCase::new(state.categories.clone(), state.genres.clone())
        .execute(CreateGenreCommand::new(
            req.name,
            req.is_active.unwrap_or(true),
            req.categories,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /genres
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Pagination<GenreListOutput>>, ApiError> {
    let page = ListGenresUseCase::new(state.genres.clone())
        .execute(params.into_query()?)
        .await?;
    Ok(Json(page))
}

/// GET /genres/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GenreOutput>, ApiError> {
    let output = GetGenreUseCase::new(state.genres.clone()).execute(id).await?;
    Ok(Json(output))
}

/// PUT /genres/{id}
#[tracing::instrument(skip(state))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<GenreRequest>,
) -> Result<Json<UpdateGenreOutput>, ApiError> {
    let output = UpdateGenreUseCase::new(state.categories.clone(), state.genres.clone())
        .execute(UpdateGenreCommand::new(
            id,
            req.name,
            req.is_active.unwrap_or(true),
            req.categories,
        ))
        .await?;
    Ok(Json(output))
}

/// DELETE /genres/{id}
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    DeleteGenreUseCase::new(state.genres.clone())
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
