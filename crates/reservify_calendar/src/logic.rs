// --- File: crates/reservify_calendar/src/logic.rs ---
use reservify_common::validation::{is_valid_date, is_valid_time};
use reservify_common::ReservifyError;
use reservify_db::repositories::CalendarRepository;
use reservify_db::{CalendarDay, DayStatus, DbError};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("{0}")]
    Validation(String),
    #[error("Store error: {0}")]
    Database(#[from] DbError),
}

impl From<CalendarError> for ReservifyError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::Validation(msg) => ReservifyError::ValidationError(msg),
            CalendarError::Database(e) => e.into(),
        }
    }
}

// --- Data Structures ---

/// Upsert request for a single date.
#[derive(Deserialize, Debug, Clone)]
pub struct SetDateRequest {
    /// Date in YYYY-MM-DD format
    pub date: String,
    /// One of available, unavailable, busy, tentative (any case)
    pub status: String,
    /// Free-text note; an omitted note writes the empty default
    pub note: Option<String>,
    /// HH:MM slots to block; omitting the field leaves stored slots
    /// untouched, an explicit empty list clears them
    pub blocked_slots: Option<Vec<String>>,
}

// --- Availability Logic ---

/// Controller for per-date availability.
///
/// Wraps a calendar repository and applies the boundary validation rules.
/// On the read side, absence of a record is never an error: a date nobody
/// has written reads back as available with nothing blocked.
pub struct CalendarController<C> {
    repo: Arc<C>,
}

impl<C: CalendarRepository> CalendarController<C> {
    /// Create a new availability controller over a repository.
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    /// Every stored calendar record, ordered by date.
    pub async fn get_all_dates(&self) -> Result<Vec<CalendarDay>, CalendarError> {
        debug!("Fetching all calendar dates");
        Ok(self.repo.list().await?)
    }

    /// The record for a date, or the available default if none was stored.
    pub async fn get_date(&self, date: &str) -> Result<CalendarDay, CalendarError> {
        if !is_valid_date(date) {
            return Err(CalendarError::Validation(
                "Invalid date format. Use YYYY-MM-DD".to_string(),
            ));
        }

        debug!("Fetching date: {}", date);
        let stored = self.repo.find_by_date(date).await?;
        Ok(stored.unwrap_or_else(|| CalendarDay::available(date)))
    }

    /// Validate and upsert the record for a date.
    ///
    /// Status and note are always overwritten; blocked slots only when the
    /// request carries them.
    pub async fn set_date(&self, request: SetDateRequest) -> Result<CalendarDay, CalendarError> {
        if !is_valid_date(&request.date) {
            return Err(CalendarError::Validation(
                "Invalid date format. Use YYYY-MM-DD".to_string(),
            ));
        }
        let status = DayStatus::parse(&request.status)
            .ok_or_else(|| CalendarError::Validation("Invalid status".to_string()))?;
        if let Some(slots) = &request.blocked_slots {
            for slot in slots {
                if !is_valid_time(slot) {
                    return Err(CalendarError::Validation(format!(
                        "Invalid time format: {}. Use HH:MM",
                        slot
                    )));
                }
            }
        }

        let existing = self.repo.find_by_date(&request.date).await?;
        let blocked_slots = match request.blocked_slots {
            Some(slots) => slots.into_iter().collect(),
            None => existing.map(|day| day.blocked_slots).unwrap_or_default(),
        };

        let day = CalendarDay {
            date: request.date,
            status,
            note: request.note.unwrap_or_default(),
            blocked_slots,
        };

        let stored = self.repo.upsert(&day).await?;
        info!("Updated date: {}", stored.date);
        Ok(stored)
    }

    /// Remove the record for a date. Succeeds whether or not one was stored.
    pub async fn delete_date(&self, date: &str) -> Result<(), CalendarError> {
        if !is_valid_date(date) {
            return Err(CalendarError::Validation(
                "Invalid date format. Use YYYY-MM-DD".to_string(),
            ));
        }

        let existed = self.repo.delete(date).await?;
        info!("Deleted date: {} (record existed: {})", date, existed);
        Ok(())
    }
}
