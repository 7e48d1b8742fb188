use chrono::NaiveDate;
use models::employee::{deserialize_optional_status, EmployeeStatus};
use serde::{Deserialize, Deserializer};

use crate::pagination::Pagination;

/// Payload for creating an employee in the relational store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<EmployeeStatus>,
}

/// Partial update. Absent fields are left alone; on nullable columns an
/// explicit `null` clears the value (`Some(None)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub role: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub department: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub salary: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub date_of_joining: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_optional_status")]
    pub status: Option<EmployeeStatus>,
}

/// Marks a field as supplied even when its value is `null`.
pub(crate) fn present<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Filters for the paginated list. Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct EmployeeQuery {
    pub pagination: Pagination,
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

impl EmployeeQuery {
    pub fn search_term(&self) -> Option<&str> { non_empty(&self.search) }
    pub fn department_filter(&self) -> Option<&str> { non_empty(&self.department) }
    pub fn status_filter(&self) -> Option<&str> { non_empty(&self.status) }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}
