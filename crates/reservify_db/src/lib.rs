//! Store layer for Reservify
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library, together with the repository
//! contracts the controllers talk to. Each contract ships twice: a SQL
//! implementation over the shared client and an in-memory implementation for
//! tests and store-less deployments.
//!
//! # Features
//!
//! - Database agnostic design
//! - Connection pooling
//! - Integration with the Reservify configuration system
//! - Support for SQLite, PostgreSQL, and MySQL
//!
//! # Example
//!
//! ```rust,no_run
//! use reservify_db::{DbClient, ReservationRepository, SqlReservationRepository};
//!
//! async fn setup() -> Result<SqlReservationRepository, Box<dyn std::error::Error>> {
//!     let client = DbClient::from_url("sqlite:reservify.db").await?;
//!     let repo = SqlReservationRepository::new(client);
//!     repo.init_schema().await?;
//!     Ok(repo)
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

// Register the SQLite driver when the crate is loaded
#[cfg(feature = "sqlite")]
mod sqlite_driver {
    // This import ensures the SQLite driver is linked and registered
    #[allow(unused_imports)]
    use sqlx::sqlite::SqlitePoolOptions as _;
}

// Re-export the client, factory, and repository traits for ease of use
pub use client::DbClient;
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repository::RepositoryFactory;

// Re-export the repositories module components for ease of use
pub use repositories::{
    CalendarRepository, CalendarRepositoryFactory, MemoryCalendarRepository,
    MemoryReservationRepository, ReservationRepository, ReservationRepositoryFactory,
    SqlCalendarRepository, SqlReservationRepository,
};

// Re-export the records the repositories store, for consumers that don't
// pull in reservify-common directly
pub use reservify_common::models::{
    CalendarDay, DateRange, DayStatus, Reservation, ReservationStatus,
};
