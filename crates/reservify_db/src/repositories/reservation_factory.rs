//! Factory for creating reservation repositories
//!
//! This module provides a factory for creating reservation repositories
//! that are designed to be database agnostic.

use crate::repositories::reservation_memory::MemoryReservationRepository;
use crate::repositories::reservation_sql::SqlReservationRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating reservation repositories
///
/// This factory provides methods for creating reservation repositories
/// backed either by a database client or by process memory.
#[derive(Debug, Clone)]
pub struct ReservationRepositoryFactory;

impl ReservationRepositoryFactory {
    /// Create a new reservation repository factory
    ///
    /// # Returns
    ///
    /// A new reservation repository factory
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReservationRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlReservationRepository, DbClient> for ReservationRepositoryFactory {
    /// Create a SQL-backed reservation repository
    ///
    /// # Arguments
    ///
    /// * `db_client` - The database client to use
    ///
    /// # Returns
    ///
    /// A new SQL reservation repository
    fn create_repository(&self, db_client: DbClient) -> SqlReservationRepository {
        SqlReservationRepository::new(db_client)
    }
}

impl RepositoryFactory<MemoryReservationRepository, ()> for ReservationRepositoryFactory {
    /// Create an in-memory reservation repository
    ///
    /// # Returns
    ///
    /// A new in-memory reservation repository
    fn create_repository(&self, _config: ()) -> MemoryReservationRepository {
        MemoryReservationRepository::new()
    }
}
