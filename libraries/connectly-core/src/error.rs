//! Core error types for Connectly

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Connectly
#[derive(Error, Debug)]
pub enum CoreError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up (e.g. "User")
        entity: String,
        /// Identifier that did not resolve
        id: String,
    },

    /// One or more required fields were absent or blank
    #[error("Missing field: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Permission denied with context
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Duplicate entry (unique constraint)
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl CoreError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                Self::Duplicate(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err)
                if db_err.kind() == sqlx::error::ErrorKind::ForeignKeyViolation =>
            {
                Self::InvalidInput(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}
