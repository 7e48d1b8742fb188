use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    /// Message without the category prefix, for client-facing responses.
    pub fn reason(&self) -> &str {
        match self {
            Self::Validation(m) => m,
        }
    }
}
