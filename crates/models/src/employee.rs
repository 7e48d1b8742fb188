use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::errors::ModelError;

/// Employment status. Stored and serialized as `Active` / `Inactive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum EmployeeStatus {
    #[default]
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Empty or missing input falls back to `Active`.
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, ModelError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::Active),
            Some(s) => s.parse(),
        }
    }
}

/// Serde helper for optional status fields: `null`, missing and blank strings
/// all read as `None`, anything else must name a status.
pub fn deserialize_optional_status<'de, D>(de: D) -> Result<Option<EmployeeStatus>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(de)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(ModelError::Validation("status must be 'Active' or 'Inactive'".into())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub role: Option<String>,
    pub department: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub salary: Option<f64>,
    pub date_of_joining: Option<Date>,
    pub status: EmployeeStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name is required".into()));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ModelError> {
    if phone.trim().is_empty() {
        return Err(ModelError::Validation("phone is required".into()));
    }
    Ok(())
}

/// Address syntax per `validator`, plus a dotted domain: single-label hosts
/// such as `ann@localhost` are refused.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation("value is not a valid email address".into());
    if !email.validate_email() {
        return Err(invalid());
    }
    match email.rsplit_once('@') {
        Some((_, domain)) if domain.contains('.') => Ok(()),
        _ => Err(invalid()),
    }
}
