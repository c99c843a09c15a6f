//! Repository for calendar availability records
//!
//! This module provides a generic interface for storing and retrieving per-date
//! availability records.

use crate::error::DbError;

// Re-export the calendar models from reservify_common for convenience
pub use reservify_common::models::{CalendarDay, DayStatus};

/// Repository for calendar availability records
///
/// At most one record exists per date; `upsert` is the only write for
/// existing and new dates alike.
pub trait CalendarRepository {
    /// Initialize the database schema
    ///
    /// This function creates the necessary tables for storing calendar records
    /// if they don't already exist.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the schema was initialized successfully, or an error if it failed
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// List every stored calendar record
    ///
    /// # Returns
    ///
    /// All stored records ordered by date, ascending
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<CalendarDay>, DbError>> + Send;

    /// Find the record for a date
    ///
    /// # Arguments
    ///
    /// * `date` - The date to look up
    ///
    /// # Returns
    ///
    /// The record if one was stored for the date, or None if not
    fn find_by_date(
        &self,
        date: &str,
    ) -> impl std::future::Future<Output = Result<Option<CalendarDay>, DbError>> + Send;

    /// Insert or replace the record for a date
    ///
    /// # Arguments
    ///
    /// * `day` - The record to store, keyed by its date
    ///
    /// # Returns
    ///
    /// The stored record
    fn upsert(
        &self,
        day: &CalendarDay,
    ) -> impl std::future::Future<Output = Result<CalendarDay, DbError>> + Send;

    /// Delete the record for a date
    ///
    /// # Arguments
    ///
    /// * `date` - The date whose record to delete
    ///
    /// # Returns
    ///
    /// `true` if a record was deleted, `false` if the date had none
    fn delete(&self, date: &str)
        -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}
