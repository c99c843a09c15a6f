//! Factory for creating database clients
//!
//! This module provides a factory for creating database clients that are
//! designed to be database agnostic.

use crate::client::DbClient;
use crate::error::DbError;
use reservify_config::{AppConfig, DatabaseConfig};
use std::sync::Arc;
use tracing::debug;

/// Factory for creating database clients
///
/// This factory provides methods for creating database clients using
/// different configuration sources.
#[derive(Debug, Clone)]
pub struct DbClientFactory;

impl DbClientFactory {
    /// Create a new database client factory
    pub fn new() -> Self {
        Self
    }

    /// Create a new database client from an application configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The application configuration
    ///
    /// # Errors
    ///
    /// This method will return an error if the database configuration is
    /// missing, the URL is missing, or the connection fails.
    pub async fn from_app_config(&self, config: &Arc<AppConfig>) -> Result<DbClient, DbError> {
        debug!("Creating database client from application configuration");

        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| DbError::ConfigError("Database configuration is missing".to_string()))?;

        self.from_db_config(db_config).await
    }

    /// Create a new database client from a database configuration
    ///
    /// # Arguments
    ///
    /// * `db_config` - The database configuration
    ///
    /// # Errors
    ///
    /// This method will return an error if the database URL is missing or the
    /// connection fails.
    pub async fn from_db_config(&self, db_config: &DatabaseConfig) -> Result<DbClient, DbError> {
        debug!("Creating database client from database configuration");

        DbClient::from_config(db_config).await
    }

    /// Create a new database client from a database URL
    ///
    /// # Arguments
    ///
    /// * `db_url` - The database URL
    ///
    /// # Errors
    ///
    /// This method will return an error if the database URL is invalid or the
    /// connection fails.
    pub async fn from_url(&self, db_url: &str) -> Result<DbClient, DbError> {
        debug!("Creating database client from URL");

        DbClient::from_url(db_url).await
    }
}

impl Default for DbClientFactory {
    fn default() -> Self {
        Self::new()
    }
}
