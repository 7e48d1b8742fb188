//! MCP server exposing the JSON-file employee store as tools.

use std::sync::Arc;

use models::employee::EmployeeStatus;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use service::file::{EmployeeDraft, EmployeeFileStore};
use service::errors::ServiceError;

use crate::schemas::{CreateEmployeeParams, DeleteEmployeeParams, ListEmployeesParams};

/// Log the full error to stderr but return a generic message to the client.
fn sanitize_internal_error(error: impl std::fmt::Display, context: &str) -> McpError {
    tracing::error!("{context} error: {error}");
    McpError::internal_error(format!("{context} failed - check server logs for details"), None)
}

fn json_result<T: Serialize>(value: &T, context: &str) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| sanitize_internal_error(e, &format!("Serialize {context}")))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Outcome of `delete_employee`.
#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}

/// MCP server over the shared employee file.
#[derive(Clone)]
pub struct EmployeeMcp {
    store: Arc<EmployeeFileStore>,
    tool_router: ToolRouter<Self>,
}

impl EmployeeMcp {
    #[must_use]
    pub fn new(store: Arc<EmployeeFileStore>) -> Self {
        Self { store, tool_router: Self::tool_router() }
    }
}

#[tool_router]
impl EmployeeMcp {
    /// Append an employee. No field or phone-format validation is applied.
    #[tool(description = "Create an employee record in the employee file and return it")]
    async fn create_employee(
        &self,
        Parameters(params): Parameters<CreateEmployeeParams>,
    ) -> Result<CallToolResult, McpError> {
        let status = EmployeeStatus::parse_or_default(params.status.as_deref())
            .map_err(|e| McpError::invalid_params(e.reason().to_string(), None))?;

        let draft = EmployeeDraft {
            name: params.name,
            email: params.email,
            phone: params.phone,
            role: params.role.unwrap_or_default(),
            department: params.department.unwrap_or_default(),
            salary: params.salary.unwrap_or(0.0),
            date_of_joining: params.date_of_joining.unwrap_or_default(),
            status,
        };
        let created = self
            .store
            .append(draft)
            .await
            .map_err(|e| sanitize_internal_error(e, "Create employee"))?;
        json_result(&created, "employee")
    }

    #[tool(description = "List every employee in the employee file")]
    async fn list_employees(
        &self,
        _params: Parameters<ListEmployeesParams>,
    ) -> Result<CallToolResult, McpError> {
        let employees = self
            .store
            .list()
            .await
            .map_err(|e| sanitize_internal_error(e, "List employees"))?;
        json_result(&employees, "employees")
    }

    /// A missing id is reported in the payload, not as a protocol error.
    #[tool(description = "Delete an employee by ID")]
    async fn delete_employee(
        &self,
        Parameters(params): Parameters<DeleteEmployeeParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.employee_id;
        let outcome = match self.store.delete(id).await {
            Ok(()) => DeleteOutcome { success: true, message: format!("Employee {id} deleted") },
            Err(ServiceError::NotFound(_)) => {
                DeleteOutcome { success: false, message: "Employee not found".into() }
            }
            Err(e) => return Err(sanitize_internal_error(e, "Delete employee")),
        };
        json_result(&outcome, "delete outcome")
    }
}

#[tool_handler]
impl ServerHandler for EmployeeMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Employee directory MCP server - create, list and delete employee records \
                 stored in the shared employee JSON file."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
