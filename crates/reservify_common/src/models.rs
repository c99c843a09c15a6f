// --- File: crates/reservify_common/src/models.rs ---
//! Core records shared across the workspace.
//!
//! Both controllers, the repositories, and the message builders work with
//! these types. Dates and times stay as validated strings (`YYYY-MM-DD`,
//! `HH:MM`): the system never does calendar arithmetic on them, and the
//! string forms sort chronologically, which is all the queries need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Lifecycle status of a reservation.
///
/// Every reservation starts as `Pending`. All four statuses are mutually
/// reachable through explicit status changes; verification is tracked
/// separately on the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Rejected,
    Cancelled,
}

impl ReservationStatus {
    /// Parse a status as callers submit it. Exact lowercase match only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "rejected" => Some(Self::Rejected),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// The canonical serialized form, as stored and returned to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking request and its lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// UUID v4, assigned at creation, immutable.
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub party_size: i64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub start_time: String,
    /// `HH:MM`, 24-hour
    pub end_time: String,
    pub status: ReservationStatus,
    /// Present only while the reservation is unverified; cleared on consumption.
    pub verification_token: Option<String>,
    /// Cleared together with the token. `None` means the token never expires.
    pub verification_expires: Option<DateTime<Utc>>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An inclusive `date >= start AND date <= end` filter for listings.
/// Both bounds travel together; there is no open-ended variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Bookability status of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[default]
    Available,
    Unavailable,
    Busy,
    Tentative,
}

impl DayStatus {
    /// Parse a status as callers submit it. Case-insensitive; the canonical
    /// serialized form is lowercase.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "available" => Some(Self::Available),
            "unavailable" => Some(Self::Unavailable),
            "busy" => Some(Self::Busy),
            "tentative" => Some(Self::Tentative),
            _ => None,
        }
    }

    /// The canonical serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Busy => "busy",
            Self::Tentative => "tentative",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-date availability: status, free-text note, and the time slots on that
/// date that are not bookable. At most one record exists per date; a date
/// with no record counts as available with nothing blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// `YYYY-MM-DD`, the unique key.
    pub date: String,
    pub status: DayStatus,
    #[serde(default)]
    pub note: String,
    /// `HH:MM` slots. A set: duplicates collapse and order is canonical.
    #[serde(default)]
    pub blocked_slots: BTreeSet<String>,
}

impl CalendarDay {
    /// The record a never-written date reads back as.
    pub fn available(date: &str) -> Self {
        Self {
            date: date.to_string(),
            status: DayStatus::Available,
            note: String::new(),
            blocked_slots: BTreeSet::new(),
        }
    }
}
