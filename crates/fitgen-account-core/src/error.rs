//! Account service errors

use thiserror::Error;

/// Account and subscription errors
#[derive(Error, Debug)]
pub enum AccountError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation (duplicate username or email)
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials
    ///
    /// Deliberately identical for unknown identifiers and wrong passwords
    /// so responses cannot be used for user enumeration.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Invalid token (malformed, bad signature, missing)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Referenced plan does not exist
    #[error("plan not found")]
    PlanNotFound,

    /// Underlying persistence failure
    #[error("database error: {0}")]
    Storage(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<fitgen_db::DbError> for AccountError {
    fn from(err: fitgen_db::DbError) -> Self {
        match err {
            fitgen_db::DbError::UniqueViolation => {
                Self::Conflict("username or email already exists".to_string())
            }
            other => {
                tracing::error!("Database error: {}", other);
                Self::Storage(other.to_string())
            }
        }
    }
}
