use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(ToSchema)]
pub enum EmployeeStatusDoc { Active, Inactive }

#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    /// ISO date, `YYYY-MM-DD`
    pub date_of_joining: Option<String>,
    pub status: EmployeeStatusDoc,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct EmployeeListDoc {
    pub items: Vec<EmployeeDoc>,
    pub total: u64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: u64,
}

#[derive(ToSchema)]
pub struct NewEmployeeDoc {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<String>,
    /// Defaults to `Active`
    pub status: Option<EmployeeStatusDoc>,
}

/// Every field optional; `null` clears role, department, salary and date_of_joining.
#[derive(ToSchema)]
pub struct EmployeeChangesDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<String>,
    pub status: Option<EmployeeStatusDoc>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Employee Management API"),
    paths(
        crate::routes::health,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::create,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            EmployeeStatusDoc,
            EmployeeDoc,
            EmployeeListDoc,
            NewEmployeeDoc,
            EmployeeChangesDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
