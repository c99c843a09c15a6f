// --- File: crates/reservify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Reservify errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for ReservifyError.
#[derive(Error, Debug)]
pub enum ReservifyError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred in a downstream collaborator (e.g. the notification gateway)
    #[error("Dependency error: {service_name} - {message}")]
    DependencyError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., token already consumed)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// The workspace itself carries no HTTP surface; consumers wiring the
/// controllers into a transport use this mapping to translate the taxonomy.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ReservifyError {
    fn status_code(&self) -> u16 {
        match self {
            ReservifyError::ParseError(_) => 400,
            ReservifyError::ConfigError(_) => 500,
            ReservifyError::ValidationError(_) => 400,
            ReservifyError::DatabaseError(_) => 500,
            ReservifyError::DependencyError { .. } => 502,
            ReservifyError::ConflictError(_) => 409,
            ReservifyError::NotFoundError(_) => 404,
            ReservifyError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| ReservifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| ReservifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<serde_json::Error> for ReservifyError {
    fn from(err: serde_json::Error) -> Self {
        ReservifyError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ReservifyError {
    fn from(err: std::io::Error) -> Self {
        ReservifyError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::ConflictError(message.to_string())
}

pub fn dependency_error<T: fmt::Display>(service_name: &str, message: T) -> ReservifyError {
    ReservifyError::DependencyError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(validation_error("bad phone").status_code(), 400);
        assert_eq!(not_found("no such reservation").status_code(), 404);
        assert_eq!(conflict("already verified").status_code(), 409);
        assert_eq!(dependency_error("smtp", "relay down").status_code(), 502);
        assert_eq!(internal_error("boom").status_code(), 500);
        assert_eq!(config_error("missing url").status_code(), 500);
    }

    #[test]
    fn context_wraps_into_internal_error() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
        let wrapped = result.context("loading schema").unwrap_err();
        assert!(matches!(wrapped, ReservifyError::InternalError(_)));
        assert!(wrapped.to_string().contains("loading schema"));
    }

    #[test]
    fn serde_errors_become_parse_errors() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("not json");
        let converted: ReservifyError = bad.unwrap_err().into();
        assert!(matches!(converted, ReservifyError::ParseError(_)));
        assert_eq!(converted.status_code(), 400);
    }
}
