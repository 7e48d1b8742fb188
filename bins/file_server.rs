use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "employee-file-api", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    let cfg = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "employee-file-api", event = "config_invalid", error = %e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };
    info!(
        service = "employee-file-api",
        %service_id,
        version,
        addr = %cfg.file_server.bind_addr(),
        file = %cfg.storage.employees_file,
        "file API configured"
    );

    let worker_threads = cfg.file_server.worker_threads;
    common::runtime::run_service("employee-file-api", worker_threads, server::run_file_api(cfg))
}
