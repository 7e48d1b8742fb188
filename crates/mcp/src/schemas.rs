//! MCP tool parameter schemas
//!
//! All structs derive `Debug`, `Deserialize`, and `JsonSchema` as required by rmcp.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for `create_employee`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateEmployeeParams {
    #[schemars(description = "Full name of the employee")]
    pub name: String,

    #[schemars(description = "Email address (not required to be unique)")]
    pub email: String,

    #[schemars(description = "Phone number, stored as given")]
    pub phone: String,

    #[schemars(description = "Job title or role")]
    pub role: Option<String>,

    #[schemars(description = "Department name")]
    pub department: Option<String>,

    #[schemars(description = "Salary (default: 0)")]
    pub salary: Option<f64>,

    #[schemars(description = "Date of joining, e.g. 2024-01-31")]
    pub date_of_joining: Option<String>,

    #[schemars(description = "Active or Inactive (default: Active)")]
    pub status: Option<String>,
}

/// Parameters for `list_employees`.
///
/// This tool takes no parameters, but we need an empty struct for the schema.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListEmployeesParams {}

/// Parameters for `delete_employee`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteEmployeeParams {
    #[schemars(description = "ID of the employee to delete")]
    pub employee_id: i64,
}
