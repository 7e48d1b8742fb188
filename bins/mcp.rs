use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    // stdout carries the protocol; logs go to stderr
    common::utils::logging::init_logging_stderr();

    let cfg = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "employee-mcp", error = %e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };
    info!(service = "employee-mcp", file = %cfg.storage.employees_file, "MCP server initialized with 3 tools");

    if let Err(e) = mcp::serve_stdio(cfg.storage.employees_file).await {
        error!(service = "employee-mcp", error = %e, "MCP server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
