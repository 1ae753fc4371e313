//! Cast member endpoints.

use std::sync::Arc;

use application::UseCase;
use application::cast_member::{
    CastMemberListOutput, CastMemberOutput, CreateCastMemberCommand, CreateCastMemberOutput,
    CreateCastMemberUseCase, DeleteCastMemberUseCase, GetCastMemberUseCase,
    ListCastMembersUseCase, UpdateCastMemberCommand, UpdateCastMemberOutput,
    UpdateCastMemberUseCase,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::Pagination;
use domain::CastMemberType;
use serde::Deserialize;

use super::{AppState, ListParams};
use crate::error::ApiError;

/// Body of create and update requests.
///
/// `type` stays a raw string so an unrecognised value reaches the validator
/// as a missing type instead of failing JSON extraction.
#[derive(Debug, Deserialize)]
pub struct CastMemberRequest {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl CastMemberRequest {
    fn kind(&self) -> Option<CastMemberType> {
        self.kind.as_deref()?.parse().ok()
    }
}

/// POST /cast_members
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CastMemberRequest>,
) -> Result<(StatusCode, Json<CreateCastMemberOutput>), ApiError> {
    let kind = req.kind();
    let output = CreateCastMemberUseCase::new(state.cast_members.clone())
        .execute(CreateCastMemberCommand::new(req.name, kind))
        .await?;

    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /cast_members
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Pagination<CastMemberListOutput>>, ApiError> {
    let page = ListCastMembersUseCase::new(state.cast_members.clone())
        .execute(params.into_query()?)
        .await?;
    Ok(Json(page))
}

/// GET /cast_members/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CastMemberOutput>, ApiError> {
    let output = GetCastMemberUseCase::new(state.cast_members.clone())
        .execute(id)
        .await?;
    Ok(Json(output))
}

/// PUT /cast_members/{id}
#[tracing::instrument(skip(state))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CastMemberRequest>,
) -> Result<Json<UpdateCastMemberOutput>, ApiError> {
    let kind = req.kind();
    let output = UpdateCastMemberUseCase::new(state.cast_members.clone())
        .execute(UpdateCastMemberCommand::new(id, req.name, kind))
        .await?;
    Ok(Json(output))
}

/// DELETE /cast_members/{id}
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    DeleteCastMemberUseCase::new(state.cast_members.clone())
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
