//! Database errors

use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// Unique index violation (duplicate username, email, or plan name)
    #[error("unique constraint violation")]
    UniqueViolation,

    /// Record not found
    #[error("record not found")]
    NotFound,
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        // Duplicate-key failures get their own variant so callers can map
        // them to a conflict instead of an internal error.
        if err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            return Self::UniqueViolation;
        }
        Self::Sqlx(err)
    }
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;
