//! Error types for the store layer

use reservify_common::ReservifyError;
use thiserror::Error;

/// Errors that can occur when working with the database client and repositories
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// Error with database transaction
    #[error("Database transaction error: {0}")]
    TransactionError(String),

    /// A stored value did not decode into its record form
    #[error("Database row error: {0}")]
    RowError(String),
}

impl From<DbError> for ReservifyError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConfigError(message) => ReservifyError::ConfigError(message),
            other => ReservifyError::DatabaseError(other.to_string()),
        }
    }
}
