//! In-memory implementation of the reservation repository
//!
//! This implementation keeps reservations in a HashMap behind a tokio RwLock.
//! It backs deployments that run without a database section and doubles as the
//! repository used in tests.

use crate::error::DbError;
use crate::repositories::reservation::{
    DateRange, Reservation, ReservationRepository, ReservationStatus,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory implementation of the reservation repository
#[derive(Debug, Clone, Default)]
pub struct MemoryReservationRepository {
    records: Arc<RwLock<HashMap<String, Reservation>>>,
}

impl MemoryReservationRepository {
    /// Create a new, empty in-memory reservation repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationRepository for MemoryReservationRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        // Nothing to create for the in-memory store
        debug!("In-memory reservation store needs no schema");
        Ok(())
    }

    async fn insert(&self, reservation: &Reservation) -> Result<Reservation, DbError> {
        let mut records = self.records.write().await;
        if records.contains_key(&reservation.id) {
            return Err(DbError::QueryError(format!(
                "duplicate reservation id: {}",
                reservation.id
            )));
        }
        records.insert(reservation.id.clone(), reservation.clone());
        Ok(reservation.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, DbError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Reservation>, DbError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.verification_token.as_deref() == Some(token))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Reservation>, DbError> {
        let records = self.records.read().await;
        let mut all: Vec<Reservation> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn list_by_date_range(&self, range: &DateRange) -> Result<Vec<Reservation>, DbError> {
        let records = self.records.read().await;
        let mut matching: Vec<Reservation> = records
            .values()
            .filter(|r| r.date >= range.start && r.date <= range.end)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn update(&self, reservation: &Reservation) -> Result<Option<Reservation>, DbError> {
        let mut records = self.records.write().await;
        match records.get_mut(&reservation.id) {
            Some(existing) => {
                // created_at is immutable; everything else follows the caller
                let mut stored = reservation.clone();
                stored.created_at = existing.created_at;
                *existing = stored.clone();
                Ok(Some(stored))
            }
            None => Ok(None),
        }
    }

    async fn update_status(
        &self,
        id: &str,
        status: ReservationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Reservation>, DbError> {
        let mut records = self.records.write().await;
        match records.get_mut(id) {
            Some(existing) => {
                existing.status = status;
                existing.updated_at = updated_at;
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn consume_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Reservation>, DbError> {
        // Holding the write lock across the lookup and the mutation keeps the
        // consume atomic: a second caller with the same token sees either the
        // token already cleared or the verified flag already set.
        let mut records = self.records.write().await;
        let found = records.values_mut().find(|r| {
            r.verification_token.as_deref() == Some(token)
                && !r.is_verified
                && r.verification_expires.map(|exp| exp > now).unwrap_or(true)
        });
        match found {
            Some(reservation) => {
                reservation.is_verified = true;
                reservation.verification_token = None;
                reservation.verification_expires = None;
                reservation.updated_at = now;
                Ok(Some(reservation.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DbError> {
        let mut records = self.records.write().await;
        Ok(records.remove(id).is_some())
    }
}
