use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ApiState, FileState};
use service::{
    employee::{EmployeeService, SeaOrmEmployeeRepository},
    file::EmployeeFileStore,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    let raw = server.bind_addr();
    raw.parse().map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

/// Connect, migrate and assemble the relational API router.
pub async fn build_db_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    if let Some(path) = common::env::sqlite_file_path(&cfg.database.url) {
        common::env::ensure_parent_dir(path)
            .await
            .map_err(|e| StartupError::Runtime(e.to_string()))?;
    }
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Runtime(format!("migrate up: {e}")))?;

    let repo = Arc::new(SeaOrmEmployeeRepository::new(db));
    let state = ApiState { employees: Arc::new(EmployeeService::new(repo)) };
    Ok(routes::build_router(state, build_cors()))
}

/// Assemble the file-backed API router over `storage.employees_file`.
pub async fn build_file_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let data_dir = std::path::Path::new(&cfg.storage.employees_file)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    common::env::ensure_env(&cfg.storage.frontend_dir, &data_dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let store = Arc::new(EmployeeFileStore::new(&cfg.storage.employees_file));
    let state = FileState { store };
    Ok(routes::build_file_router(state, &cfg.storage.frontend_dir, build_cors()))
}

async fn serve(app: Router, addr: SocketAddr, surface: &'static str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, surface, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: relational REST API.
pub async fn run_db_api(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&cfg.server)?;
    let app = build_db_app(&cfg).await?;
    serve(app, addr, "relational").await
}

/// Public entry: JSON-file REST API.
pub async fn run_file_api(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&cfg.file_server)?;
    let app = build_file_app(&cfg).await?;
    info!(path = %cfg.storage.employees_file, "employee file store");
    serve(app, addr, "file").await
}
