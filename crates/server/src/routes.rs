use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Message};
use service::employee::{EmployeeService, SeaOrmEmployeeRepository};
use service::file::EmployeeFileStore;

use crate::openapi::ApiDoc;

pub mod employees;
pub mod file_employees;

/// Shared state of the relational API.
#[derive(Clone)]
pub struct ApiState {
    pub employees: Arc<EmployeeService<SeaOrmEmployeeRepository>>,
}

/// Shared state of the file-backed API.
#[derive(Clone)]
pub struct FileState {
    pub store: Arc<EmployeeFileStore>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn root() -> Json<Message> {
    Json(Message::new("Employee Management API is running"))
}

async fn file_api_health() -> Json<Message> {
    Json(Message::new("Employee file API is running"))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Permissive CORS plus request tracing: INFO span per request, ERROR on 5xx.
fn with_layers(router: Router, cors: CorsLayer) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    // method and path on every span
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    // status code and latency
                    .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            )
            .layer(cors),
    )
}

/// Relational REST surface: `/employees` plus banner, health and OpenAPI document.
pub fn build_router(state: ApiState, cors: CorsLayer) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/:id",
            get(employees::get)
                .put(employees::update)
                .patch(employees::update)
                .delete(employees::delete),
        )
        .with_state(state);
    with_layers(router, cors)
}

/// File-backed REST surface under `/api`, with the frontend directory as fallback.
pub fn build_file_router(state: FileState, frontend_dir: &str, cors: CorsLayer) -> Router {
    let index = format!("{}/index.html", frontend_dir.trim_end_matches('/'));
    let static_dir = ServeDir::new(frontend_dir).fallback(ServeFile::new(index));

    let router = Router::new()
        .route("/api/health", get(file_api_health))
        .route("/api/employees", get(file_employees::list).post(file_employees::create))
        .route(
            "/api/employees/:id",
            get(file_employees::get)
                .put(file_employees::update)
                .delete(file_employees::delete),
        )
        .with_state(state)
        .fallback_service(static_dir);
    with_layers(router, cors)
}
