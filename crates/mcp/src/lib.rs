//! Model Context Protocol front end for the employee JSON file.
//!
//! Tools: `create_employee`, `list_employees`, `delete_employee`. They share
//! the store (and its lock/atomic write) with the file REST API.

pub mod schemas;
pub mod server;

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::ServiceExt;
use service::file::EmployeeFileStore;

pub use server::EmployeeMcp;

/// Serve the tools over stdio until the client disconnects.
pub async fn serve_stdio(employees_file: impl Into<PathBuf>) -> anyhow::Result<()> {
    let store = Arc::new(EmployeeFileStore::new(employees_file));
    tracing::info!(path = %store.path().display(), "Starting employee MCP server on stdio transport");
    let service = EmployeeMcp::new(store).serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
