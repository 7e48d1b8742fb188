use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use models::employee;
use serde::{Deserialize, Serialize};
use service::employee::{EmployeeChanges, EmployeeQuery, NewEmployee};
use service::pagination::{total_pages, Pagination};
use tracing::info;

use crate::{errors::JsonApiError, routes::ApiState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page; values below 1 are treated as 1
    pub page: Option<i64>,
    /// Items per page; values below 1 are treated as 10
    pub page_size: Option<i64>,
    /// Case-insensitive substring of name or email
    pub search: Option<String>,
    pub department: Option<String>,
    /// `Active` or `Inactive`
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    pub items: Vec<employee::Model>,
    pub total: u64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: u64,
}

#[utoipa::path(
    get, path = "/employees", tag = "employees",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of matching employees", body = crate::openapi::EmployeeListDoc),
        (status = 400, description = "Invalid query string", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<ApiState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<EmployeeListResponse>, JsonApiError> {
    let Query(q) = query?;
    let pagination = Pagination::new(q.page, q.page_size).clamped();
    let query = EmployeeQuery { pagination, search: q.search, department: q.department, status: q.status };

    let (items, total) = state.employees.list(&query).await?;
    info!(count = items.len(), total, page = pagination.page, "list employees");
    Ok(Json(EmployeeListResponse {
        items,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
        total_pages: total_pages(total, pagination.page_size),
    }))
}

#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<employee::Model>, JsonApiError> {
    let Path(id) = id?;
    match state.employees.get(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(JsonApiError::not_found()),
    }
}

#[utoipa::path(
    post, path = "/employees", tag = "employees",
    request_body = crate::openapi::NewEmployeeDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Validation error or duplicate email", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ApiState>,
    input: Result<Json<NewEmployee>, JsonRejection>,
) -> Result<(StatusCode, Json<employee::Model>), JsonApiError> {
    let Json(input) = input?;
    let created = state.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Serves both PUT and PATCH; either one is a partial update.
#[utoipa::path(
    put, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = crate::openapi::EmployeeChangesDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Validation error or duplicate email", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
    changes: Result<Json<EmployeeChanges>, JsonRejection>,
) -> Result<Json<employee::Model>, JsonApiError> {
    let Path(id) = id?;
    let Json(changes) = changes?;
    Ok(Json(state.employees.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ApiState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
