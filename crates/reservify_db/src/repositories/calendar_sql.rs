//! SQL implementation of the calendar repository
//!
//! This module provides a SQL implementation of the CalendarRepository trait.

use crate::error::DbError;
use crate::repositories::calendar::{CalendarDay, CalendarRepository, DayStatus};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use std::collections::BTreeSet;
use tracing::{debug, error, info};

/// SQL implementation of the calendar repository
#[derive(Debug, Clone)]
pub struct SqlCalendarRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlCalendarRepository {
    /// Create a new SQL calendar repository
    ///
    /// # Arguments
    ///
    /// * `db_client` - The database client
    ///
    /// # Returns
    ///
    /// A new SQL calendar repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

/// Map a database row to a calendar record
///
/// Blocked slots are stored as a JSON array in a TEXT column; the status is
/// stored as its lowercase name.
fn row_to_day(row: &AnyRow) -> Result<CalendarDay, DbError> {
    let status_raw: String = row.try_get("status")?;
    let status = DayStatus::parse(&status_raw)
        .ok_or_else(|| DbError::RowError(format!("unknown day status: {}", status_raw)))?;

    let slots_raw: String = row.try_get("blocked_slots")?;
    let blocked_slots: BTreeSet<String> = serde_json::from_str(&slots_raw)
        .map_err(|e| DbError::RowError(format!("invalid blocked slots '{}': {}", slots_raw, e)))?;

    Ok(CalendarDay {
        date: row.try_get("date")?,
        status,
        note: row.try_get("note")?,
        blocked_slots,
    })
}

impl CalendarRepository for SqlCalendarRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing calendar schema");

        // Create the calendar_days table if it doesn't exist
        let query = r#"
            CREATE TABLE IF NOT EXISTS calendar_days (
                date TEXT PRIMARY KEY,
                status TEXT NOT NULL DEFAULT 'available',
                note TEXT NOT NULL DEFAULT '',
                blocked_slots TEXT NOT NULL DEFAULT '[]'
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Calendar schema initialized successfully");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CalendarDay>, DbError> {
        debug!("Listing all calendar records");

        let query = r#"
            SELECT date, status, note, blocked_slots
            FROM calendar_days
            ORDER BY date ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list calendar records: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(row_to_day).collect()
    }

    async fn find_by_date(&self, date: &str) -> Result<Option<CalendarDay>, DbError> {
        debug!("Finding calendar record for date: {}", date);

        let query = r#"
            SELECT date, status, note, blocked_slots
            FROM calendar_days
            WHERE date = $1
        "#;

        let result = sqlx::query(query)
            .bind(date)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find calendar record: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if let Some(row) = result {
            Ok(Some(row_to_day(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn upsert(&self, day: &CalendarDay) -> Result<CalendarDay, DbError> {
        debug!("Upserting calendar record for date: {}", day.date);

        let blocked_slots = serde_json::to_string(&day.blocked_slots)
            .map_err(|e| DbError::QueryError(e.to_string()))?;

        let query = r#"
            INSERT INTO calendar_days (date, status, note, blocked_slots)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(date) DO UPDATE
            SET status = excluded.status, note = excluded.note,
                blocked_slots = excluded.blocked_slots
            RETURNING date, status, note, blocked_slots
        "#;

        let row = sqlx::query(query)
            .bind(&day.date)
            .bind(day.status.as_str())
            .bind(&day.note)
            .bind(&blocked_slots)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to upsert calendar record: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row_to_day(&row)
    }

    async fn delete(&self, date: &str) -> Result<bool, DbError> {
        debug!("Deleting calendar record for date: {}", date);

        let query = r#"
            DELETE FROM calendar_days
            WHERE date = $1
        "#;

        let result = sqlx::query(query)
            .bind(date)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete calendar record: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
