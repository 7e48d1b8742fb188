use std::path::PathBuf;

use models::employee::{deserialize_optional_status, EmployeeStatus};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::info;

use crate::employee::domain::present;
use crate::errors::ServiceError;
use crate::storage::json_array_store::JsonArrayStore;

pub const PHONE_FORMAT_MESSAGE: &str = "Phone number must be exactly 10 digits";

/// Employee record as persisted in the JSON file. Optional text fields are
/// stored as `""` rather than omitted; there are no timestamps.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FileEmployee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_of_joining: String,
    #[serde(default)]
    pub status: EmployeeStatus,
}

fn null_as_default<'de, T, D>(de: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// Accepts the phone as a JSON string or number.
fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(de)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!("expected a string or number, got {other}"))),
    }
}

/// Request payload for the file REST surface. Used for both create (where
/// `name`, `email` and `phone` are required) and partial update. On update an
/// explicit `null` resets an optional field to its empty value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileEmployeeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub role: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub department: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub salary: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub date_of_joining: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<EmployeeStatus>,
}

/// Fully-specified record minus its id. No validation is applied to drafts.
#[derive(Clone, Debug, Default)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub salary: f64,
    pub date_of_joining: String,
    pub status: EmployeeStatus,
}

impl EmployeeDraft {
    fn into_record(self, id: i64) -> FileEmployee {
        FileEmployee {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            department: self.department,
            salary: self.salary,
            date_of_joining: self.date_of_joining,
            status: self.status,
        }
    }
}

/// Strip everything but ASCII digits; exactly ten must remain.
pub fn normalize_phone(raw: &str) -> Result<String, ServiceError> {
    let digits: String = raw.trim().chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return Err(ServiceError::Validation(PHONE_FORMAT_MESSAGE.into()));
    }
    Ok(digits)
}

/// Max existing id + 1, or 1 for an empty collection.
pub fn next_id(employees: &[FileEmployee]) -> i64 {
    employees.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
}

fn required(field: &str, value: Option<String>) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::Validation(format!("'{field}' is required"))),
    }
}

/// JSON-file employee collection shared by the file REST API and the MCP tools.
/// Email uniqueness is deliberately not enforced here.
pub struct EmployeeFileStore {
    store: JsonArrayStore<FileEmployee>,
}

impl EmployeeFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { store: JsonArrayStore::new(path) }
    }

    pub fn path(&self) -> &std::path::Path {
        self.store.path()
    }

    pub async fn list(&self) -> Result<Vec<FileEmployee>, ServiceError> {
        self.store.load().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<FileEmployee>, ServiceError> {
        Ok(self.store.load().await?.into_iter().find(|e| e.id == id))
    }

    /// Validate a REST create payload and append it.
    pub async fn create(&self, input: FileEmployeeInput) -> Result<FileEmployee, ServiceError> {
        let name = required("name", input.name)?;
        let email = required("email", input.email)?;
        let phone = normalize_phone(&required("phone", input.phone)?)?;
        self.append(EmployeeDraft {
            name,
            email,
            phone,
            role: input.role.flatten().unwrap_or_default(),
            department: input.department.flatten().unwrap_or_default(),
            salary: input.salary.flatten().unwrap_or_default(),
            date_of_joining: input.date_of_joining.flatten().unwrap_or_default(),
            status: input.status.unwrap_or_default(),
        })
        .await
    }

    /// Append a record with the next id, without any field validation.
    pub async fn append(&self, draft: EmployeeDraft) -> Result<FileEmployee, ServiceError> {
        let created = self
            .store
            .update(|employees| {
                let record = draft.into_record(next_id(employees));
                employees.push(record.clone());
                Ok(record)
            })
            .await?;
        info!(id = created.id, path = %self.path().display(), "file_employee_created");
        Ok(created)
    }

    /// Partial update. The phone, when supplied, is normalized and must be 10 digits.
    pub async fn update(&self, id: i64, input: FileEmployeeInput) -> Result<FileEmployee, ServiceError> {
        let updated = self
            .store
            .update(|employees| {
                let emp = employees
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| ServiceError::not_found("Employee"))?;
                if let Some(raw) = input.phone.as_deref() {
                    emp.phone = normalize_phone(raw)?;
                }
                if let Some(name) = input.name { emp.name = name; }
                if let Some(email) = input.email { emp.email = email; }
                if let Some(role) = input.role { emp.role = role.unwrap_or_default(); }
                if let Some(department) = input.department { emp.department = department.unwrap_or_default(); }
                if let Some(salary) = input.salary { emp.salary = salary.unwrap_or_default(); }
                if let Some(date) = input.date_of_joining { emp.date_of_joining = date.unwrap_or_default(); }
                if let Some(status) = input.status { emp.status = status; }
                Ok(emp.clone())
            })
            .await?;
        info!(id, "file_employee_updated");
        Ok(updated)
    }

    /// Hard delete. A missing id leaves the file untouched.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.store
            .update(|employees| {
                let before = employees.len();
                employees.retain(|e| e.id != id);
                if employees.len() == before {
                    return Err(ServiceError::not_found("Employee"));
                }
                Ok(())
            })
            .await?;
        info!(id, "file_employee_deleted");
        Ok(())
    }
}
