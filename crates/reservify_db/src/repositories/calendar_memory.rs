//! In-memory implementation of the calendar repository
//!
//! This implementation keeps calendar records in a HashMap behind a tokio
//! RwLock, keyed by date. It backs deployments that run without a database
//! section and doubles as the repository used in tests.

use crate::error::DbError;
use crate::repositories::calendar::{CalendarDay, CalendarRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory implementation of the calendar repository
#[derive(Debug, Clone, Default)]
pub struct MemoryCalendarRepository {
    records: Arc<RwLock<HashMap<String, CalendarDay>>>,
}

impl MemoryCalendarRepository {
    /// Create a new, empty in-memory calendar repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalendarRepository for MemoryCalendarRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        // Nothing to create for the in-memory store
        debug!("In-memory calendar store needs no schema");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CalendarDay>, DbError> {
        let records = self.records.read().await;
        let mut all: Vec<CalendarDay> = records.values().cloned().collect();
        all.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(all)
    }

    async fn find_by_date(&self, date: &str) -> Result<Option<CalendarDay>, DbError> {
        let records = self.records.read().await;
        Ok(records.get(date).cloned())
    }

    async fn upsert(&self, day: &CalendarDay) -> Result<CalendarDay, DbError> {
        let mut records = self.records.write().await;
        records.insert(day.date.clone(), day.clone());
        Ok(day.clone())
    }

    async fn delete(&self, date: &str) -> Result<bool, DbError> {
        let mut records = self.records.write().await;
        Ok(records.remove(date).is_some())
    }
}
