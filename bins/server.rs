use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // load .env first so RUST_LOG / LOG_FORMAT take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "employee-api", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    let cfg = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "employee-api", event = "config_invalid", error = %e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };
    info!(service = "employee-api", %service_id, version, addr = %cfg.server.bind_addr(), "relational API configured");

    let worker_threads = cfg.server.worker_threads;
    common::runtime::run_service("employee-api", worker_threads, server::run_db_api(cfg))
}
