//! Factory for creating calendar repositories
//!
//! This module provides a factory for creating calendar repositories
//! that are designed to be database agnostic.

use crate::repositories::calendar_memory::MemoryCalendarRepository;
use crate::repositories::calendar_sql::SqlCalendarRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating calendar repositories
///
/// This factory provides methods for creating calendar repositories
/// backed either by a database client or by process memory.
#[derive(Debug, Clone)]
pub struct CalendarRepositoryFactory;

impl CalendarRepositoryFactory {
    /// Create a new calendar repository factory
    ///
    /// # Returns
    ///
    /// A new calendar repository factory
    pub fn new() -> Self {
        Self
    }
}

impl Default for CalendarRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlCalendarRepository, DbClient> for CalendarRepositoryFactory {
    /// Create a SQL-backed calendar repository
    ///
    /// # Arguments
    ///
    /// * `db_client` - The database client to use
    ///
    /// # Returns
    ///
    /// A new SQL calendar repository
    fn create_repository(&self, db_client: DbClient) -> SqlCalendarRepository {
        SqlCalendarRepository::new(db_client)
    }
}

impl RepositoryFactory<MemoryCalendarRepository, ()> for CalendarRepositoryFactory {
    /// Create an in-memory calendar repository
    ///
    /// # Returns
    ///
    /// A new in-memory calendar repository
    fn create_repository(&self, _config: ()) -> MemoryCalendarRepository {
        MemoryCalendarRepository::new()
    }
}
