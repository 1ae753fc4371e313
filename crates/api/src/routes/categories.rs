//! Category endpoints.

use std::sync::Arc;

use application::UseCase;
use application::category::{
    CategoryListOutput, CategoryOutput, CreateCategoryCommand, CreateCategoryOutput,
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase, ListCategoriesUseCase,
    UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::Pagination;
use serde::Deserialize;

use super::{AppState, ListParams};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// POST /categories
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CreateCategoryOutput>), ApiError> {
    let output = CreateCategoryUseCase::new(state.categories.clone())
        .execute(CreateCategoryCommand::new(
            req.name,
            req.description,
            req.is_active.unwrap_or(true),
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /categories
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Pagination<CategoryListOutput>>, ApiError> {
    let page = ListCategoriesUseCase::new(state.categories.clone())
        .execute(params.into_query()?)
        .await?;
    Ok(Json(page))
}

/// GET /categories/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CategoryOutput>, ApiError> {
    let output = GetCategoryUseCase::new(state.categories.clone())
        .execute(id)
        .await?;
    Ok(Json(output))
}

/// PUT /categories/{id}
#[tracing::instrument(skip(state))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<UpdateCategoryOutput>, ApiError> {
    let output = UpdateCategoryUseCase::new(state.categories.clone())
        .execute(UpdateCategoryCommand::new(
            id,
            req.name,
            req.description,
            req.is_active.unwrap_or(true),
        ))
        .await?;
    Ok(Json(output))
}

/// DELETE /categories/{id}
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    DeleteCategoryUseCase::new(state.categories.clone())
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
