//! Repository factory contract
//!
//! The repositories themselves are per-entity traits (see [`crate::repositories`]);
//! this module defines the factory contract used to construct them. A factory
//! is generic over the repository it produces and the context it needs:
//! SQL-backed repositories are built from a [`crate::DbClient`], the in-memory
//! ones from nothing. Which backend a deployment wires is decided by the
//! `use_database` toggle (see `reservify_common::is_database_enabled`).

/// A trait for database repository factories
///
/// This trait defines a factory for creating repository instances.
/// It is generic over the repository type and the configuration type.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration for the repository
    ///
    /// # Returns
    ///
    /// A new repository instance
    fn create_repository(&self, config: C) -> R;
}
