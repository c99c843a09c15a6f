//! Repository for reservations
//!
//! This module provides a generic interface for storing and retrieving reservation
//! records in the database.

use crate::error::DbError;
use chrono::{DateTime, Utc};

// Re-export the reservation models from reservify_common for convenience
pub use reservify_common::models::{DateRange, Reservation, ReservationStatus};

/// Repository for reservations
///
/// This trait defines the interface for storing and retrieving reservation
/// records in the database.
pub trait ReservationRepository {
    /// Initialize the database schema
    ///
    /// This function creates the necessary tables for storing reservations
    /// if they don't already exist.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the schema was initialized successfully, or an error if it failed
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Insert a new reservation
    ///
    /// # Arguments
    ///
    /// * `reservation` - The reservation to store
    ///
    /// # Returns
    ///
    /// The stored reservation as persisted
    fn insert(
        &self,
        reservation: &Reservation,
    ) -> impl std::future::Future<Output = Result<Reservation, DbError>> + Send;

    /// Find a reservation by its ID
    ///
    /// # Arguments
    ///
    /// * `id` - The reservation ID
    ///
    /// # Returns
    ///
    /// The reservation if found, or None if not found
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Reservation>, DbError>> + Send;

    /// Find a reservation by its verification token
    ///
    /// # Arguments
    ///
    /// * `token` - The verification token
    ///
    /// # Returns
    ///
    /// The reservation if found, or None if not found
    fn find_by_token(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Option<Reservation>, DbError>> + Send;

    /// List all reservations, newest first
    ///
    /// # Returns
    ///
    /// All reservations ordered by creation time, descending
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Reservation>, DbError>> + Send;

    /// List reservations whose date falls inside a range
    ///
    /// Both bounds are inclusive.
    ///
    /// # Arguments
    ///
    /// * `range` - The date range to filter by
    ///
    /// # Returns
    ///
    /// Matching reservations ordered by creation time, descending
    fn list_by_date_range(
        &self,
        range: &DateRange,
    ) -> impl std::future::Future<Output = Result<Vec<Reservation>, DbError>> + Send;

    /// Replace the stored record for a reservation
    ///
    /// # Arguments
    ///
    /// * `reservation` - The reservation to store, matched on its ID
    ///
    /// # Returns
    ///
    /// The updated reservation, or None if no record with that ID exists
    fn update(
        &self,
        reservation: &Reservation,
    ) -> impl std::future::Future<Output = Result<Option<Reservation>, DbError>> + Send;

    /// Update only the status of a reservation
    ///
    /// # Arguments
    ///
    /// * `id` - The reservation ID
    /// * `status` - The new status
    /// * `updated_at` - The timestamp to record for the change
    ///
    /// # Returns
    ///
    /// The updated reservation, or None if no record with that ID exists
    fn update_status(
        &self,
        id: &str,
        status: ReservationStatus,
        updated_at: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<Option<Reservation>, DbError>> + Send;

    /// Atomically verify the reservation holding a token
    ///
    /// Marks the matching reservation as verified and clears its token, but only
    /// if it is not yet verified and the token has not expired. The check and the
    /// write happen as a single operation so that two concurrent calls with the
    /// same token cannot both succeed.
    ///
    /// # Arguments
    ///
    /// * `token` - The verification token
    /// * `now` - The current time, used for the expiry check and `updated_at`
    ///
    /// # Returns
    ///
    /// The verified reservation, or None if no unverified, unexpired record
    /// holds the token
    fn consume_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<Option<Reservation>, DbError>> + Send;

    /// Delete a reservation
    ///
    /// # Arguments
    ///
    /// * `id` - The reservation ID
    ///
    /// # Returns
    ///
    /// `true` if a reservation was deleted, `false` if no record was found
    fn delete(&self, id: &str) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}
