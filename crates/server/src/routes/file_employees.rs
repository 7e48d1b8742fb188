use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use service::file::{FileEmployee, FileEmployeeInput};
use tracing::info;

use crate::{errors::JsonApiError, routes::FileState};

pub async fn list(State(state): State<FileState>) -> Result<Json<Vec<FileEmployee>>, JsonApiError> {
    let all = state.store.list().await?;
    info!(count = all.len(), "list file employees");
    Ok(Json(all))
}

pub async fn get(
    State(state): State<FileState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<FileEmployee>, JsonApiError> {
    let Path(id) = id?;
    state.store.get(id).await?.map(Json).ok_or_else(JsonApiError::not_found)
}

pub async fn create(
    State(state): State<FileState>,
    input: Result<Json<FileEmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<FileEmployee>), JsonApiError> {
    let Json(input) = input?;
    let created = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<FileState>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<FileEmployeeInput>, JsonRejection>,
) -> Result<Json<FileEmployee>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    Ok(Json(state.store.update(id, input).await?))
}

pub async fn delete(
    State(state): State<FileState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
