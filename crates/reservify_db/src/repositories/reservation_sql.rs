//! SQL implementation of the reservation repository
//!
//! This module provides a SQL implementation of the ReservationRepository trait.

use crate::error::DbError;
use crate::repositories::reservation::{
    DateRange, Reservation, ReservationRepository, ReservationStatus,
};
use crate::DbClient;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the reservation repository
#[derive(Debug, Clone)]
pub struct SqlReservationRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlReservationRepository {
    /// Create a new SQL reservation repository
    ///
    /// # Arguments
    ///
    /// * `db_client` - The database client
    ///
    /// # Returns
    ///
    /// A new SQL reservation repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

/// Encode a timestamp as fixed-width RFC 3339 text.
///
/// Microsecond precision keeps every encoded value the same width, so the
/// lexicographic order of the TEXT column matches chronological order.
fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a timestamp stored by [`encode_timestamp`].
fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::RowError(format!("invalid timestamp '{}': {}", raw, e)))
}

/// Map a database row to a reservation
///
/// Timestamps travel as RFC 3339 text and the status as its lowercase name,
/// because DateTime<Utc> and custom enums don't implement Decode for sqlx::Any.
fn row_to_reservation(row: &AnyRow) -> Result<Reservation, DbError> {
    let status_raw: String = row.try_get("status")?;
    let status = ReservationStatus::parse(&status_raw)
        .ok_or_else(|| DbError::RowError(format!("unknown reservation status: {}", status_raw)))?;

    let verification_expires = row
        .try_get::<Option<String>, _>("verification_expires")?
        .map(|raw| decode_timestamp(&raw))
        .transpose()?;
    let created_at = decode_timestamp(&row.try_get::<String, _>("created_at")?)?;
    let updated_at = decode_timestamp(&row.try_get::<String, _>("updated_at")?)?;

    Ok(Reservation {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        party_size: row.try_get("party_size")?,
        date: row.try_get("date")?,
        start_time: row.try_get("start_time")?,
        end_time: row.try_get("end_time")?,
        status,
        verification_token: row.try_get("verification_token")?,
        verification_expires,
        is_verified: row.try_get::<i64, _>("is_verified")? != 0,
        created_at,
        updated_at,
    })
}

impl ReservationRepository for SqlReservationRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing reservation schema");

        // Create the reservations table if it doesn't exist
        let query = r#"
            CREATE TABLE IF NOT EXISTS reservations (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                party_size INTEGER NOT NULL,
                date TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                verification_token TEXT,
                verification_expires TEXT,
                is_verified INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;

        self.db_client
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_reservations_token \
                 ON reservations (verification_token)",
            )
            .await?;
        self.db_client
            .execute("CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations (date)")
            .await?;

        info!("Reservation schema initialized successfully");
        Ok(())
    }

    async fn insert(&self, reservation: &Reservation) -> Result<Reservation, DbError> {
        debug!("Inserting reservation for: {}", reservation.email);

        let query = r#"
            INSERT INTO reservations (
                id, name, email, phone, party_size, date, start_time, end_time,
                status, verification_token, verification_expires, is_verified,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id, name, email, phone, party_size, date, start_time, end_time,
                      status, verification_token, verification_expires, is_verified,
                      created_at, updated_at
        "#;

        // Use a manual row mapping approach instead of query_as to avoid issues with DateTime<Utc>
        let row = sqlx::query(query)
            .bind(&reservation.id)
            .bind(&reservation.name)
            .bind(&reservation.email)
            .bind(&reservation.phone)
            .bind(reservation.party_size)
            .bind(&reservation.date)
            .bind(&reservation.start_time)
            .bind(&reservation.end_time)
            .bind(reservation.status.as_str())
            .bind(reservation.verification_token.as_deref())
            .bind(reservation.verification_expires.map(encode_timestamp))
            .bind(i64::from(reservation.is_verified))
            .bind(encode_timestamp(reservation.created_at))
            .bind(encode_timestamp(reservation.updated_at))
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert reservation: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let inserted = row_to_reservation(&row)?;

        info!("Reservation {} created successfully", inserted.id);
        Ok(inserted)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, DbError> {
        debug!("Finding reservation by id: {}", id);

        let query = r#"
            SELECT id, name, email, phone, party_size, date, start_time, end_time,
                   status, verification_token, verification_expires, is_verified,
                   created_at, updated_at
            FROM reservations
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find reservation: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if let Some(row) = result {
            Ok(Some(row_to_reservation(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Reservation>, DbError> {
        debug!("Finding reservation by verification token");

        let query = r#"
            SELECT id, name, email, phone, party_size, date, start_time, end_time,
                   status, verification_token, verification_expires, is_verified,
                   created_at, updated_at
            FROM reservations
            WHERE verification_token = $1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find reservation by token: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if let Some(row) = result {
            Ok(Some(row_to_reservation(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> Result<Vec<Reservation>, DbError> {
        debug!("Listing all reservations");

        let query = r#"
            SELECT id, name, email, phone, party_size, date, start_time, end_time,
                   status, verification_token, verification_expires, is_verified,
                   created_at, updated_at
            FROM reservations
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list reservations: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(row_to_reservation).collect()
    }

    async fn list_by_date_range(&self, range: &DateRange) -> Result<Vec<Reservation>, DbError> {
        debug!("Listing reservations between {} and {}", range.start, range.end);

        let query = r#"
            SELECT id, name, email, phone, party_size, date, start_time, end_time,
                   status, verification_token, verification_expires, is_verified,
                   created_at, updated_at
            FROM reservations
            WHERE date >= $1 AND date <= $2
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(&range.start)
            .bind(&range.end)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list reservations by date range: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(row_to_reservation).collect()
    }

    async fn update(&self, reservation: &Reservation) -> Result<Option<Reservation>, DbError> {
        debug!("Updating reservation: {}", reservation.id);

        let query = r#"
            UPDATE reservations
            SET name = $1, email = $2, phone = $3, party_size = $4, date = $5,
                start_time = $6, end_time = $7, status = $8, verification_token = $9,
                verification_expires = $10, is_verified = $11, updated_at = $12
            WHERE id = $13
            RETURNING id, name, email, phone, party_size, date, start_time, end_time,
                      status, verification_token, verification_expires, is_verified,
                      created_at, updated_at
        "#;

        let result = sqlx::query(query)
            .bind(&reservation.name)
            .bind(&reservation.email)
            .bind(&reservation.phone)
            .bind(reservation.party_size)
            .bind(&reservation.date)
            .bind(&reservation.start_time)
            .bind(&reservation.end_time)
            .bind(reservation.status.as_str())
            .bind(reservation.verification_token.as_deref())
            .bind(reservation.verification_expires.map(encode_timestamp))
            .bind(i64::from(reservation.is_verified))
            .bind(encode_timestamp(reservation.updated_at))
            .bind(&reservation.id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update reservation: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if let Some(row) = result {
            Ok(Some(row_to_reservation(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn update_status(
        &self,
        id: &str,
        status: ReservationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Reservation>, DbError> {
        debug!("Updating reservation {} status to: {}", id, status);

        let query = r#"
            UPDATE reservations
            SET status = $1, updated_at = $2
            WHERE id = $3
            RETURNING id, name, email, phone, party_size, date, start_time, end_time,
                      status, verification_token, verification_expires, is_verified,
                      created_at, updated_at
        "#;

        let result = sqlx::query(query)
            .bind(status.as_str())
            .bind(encode_timestamp(updated_at))
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update reservation status: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if let Some(row) = result {
            Ok(Some(row_to_reservation(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn consume_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Reservation>, DbError> {
        debug!("Consuming verification token");

        // Single statement so that two concurrent calls with the same token
        // cannot both see is_verified = 0. The expiry comparison works on the
        // stored text because encoded timestamps sort lexicographically.
        let query = r#"
            UPDATE reservations
            SET is_verified = 1, verification_token = NULL,
                verification_expires = NULL, updated_at = $2
            WHERE verification_token = $1
              AND is_verified = 0
              AND (verification_expires IS NULL OR verification_expires > $3)
            RETURNING id, name, email, phone, party_size, date, start_time, end_time,
                      status, verification_token, verification_expires, is_verified,
                      created_at, updated_at
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .bind(encode_timestamp(now))
            .bind(encode_timestamp(now))
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to consume verification token: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if let Some(row) = result {
            let verified = row_to_reservation(&row)?;
            info!("Reservation {} verified successfully", verified.id);
            Ok(Some(verified))
        } else {
            Ok(None)
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DbError> {
        debug!("Deleting reservation: {}", id);

        let query = r#"
            DELETE FROM reservations
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete reservation: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn encoded_timestamps_sort_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2025, 12, 24, 18, 0, 0).unwrap();
        let later = earlier + Duration::microseconds(1);

        let a = encode_timestamp(earlier);
        let b = encode_timestamp(later);
        assert_eq!(a.len(), b.len());
        assert!(a < b);
    }

    #[test]
    fn decode_inverts_encode() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 9, 30, 15).unwrap();
        assert_eq!(decode_timestamp(&encode_timestamp(ts)).unwrap(), ts);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode_timestamp("not-a-timestamp");
        assert!(matches!(err, Err(DbError::RowError(_))));
    }
}
