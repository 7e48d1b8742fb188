use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

pub const DUPLICATE_EMAIL: &str = "Email already exists";

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn duplicate_email() -> Self { Self::Conflict(DUPLICATE_EMAIL.into()) }

    /// Client-facing message without the category prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::Conflict(m) | Self::Db(m) => m.clone(),
            Self::Model(e) => e.reason().to_string(),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        // A unique-index hit on insert/update races the explicit email check.
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::duplicate_email(),
            _ => Self::Db(e.to_string()),
        }
    }
}
