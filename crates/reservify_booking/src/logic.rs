// --- File: crates/reservify_booking/src/logic.rs ---
use crate::messages;
use crate::token::VerificationIssuer;
use chrono::Utc;
use reservify_common::logging::log_error;
use reservify_common::services::{BoxedError, NotificationService};
use reservify_common::validation::{
    is_valid_date, is_valid_email, is_valid_party_size, is_valid_phone, is_valid_time,
    MAX_PARTY_SIZE, MIN_PARTY_SIZE,
};
use reservify_common::ReservifyError;
use reservify_config::BookingConfig;
use reservify_db::repositories::ReservationRepository;
use reservify_db::{DateRange, DbError, Reservation, ReservationStatus};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Store error: {0}")]
    Database(#[from] DbError),
}

impl From<BookingError> for ReservifyError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(message) => ReservifyError::ValidationError(message),
            BookingError::NotFound(message) => ReservifyError::NotFoundError(message),
            BookingError::Conflict(message) => ReservifyError::ConflictError(message),
            BookingError::Database(e) => e.into(),
        }
    }
}

// --- Data Structures ---
/// Input for creating a reservation.
#[derive(Deserialize, Debug, Clone)]
pub struct NewReservation {
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
}

/// Partial update of a stored reservation. Only supplied fields change.
///
/// Identity, verification state, and timestamps are server-assigned and
/// deliberately absent here.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReservationUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub party_size: Option<i64>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Status as submitted, e.g. `"confirmed"`. Exact lowercase match.
    pub status: Option<String>,
}

/// Result of a status change: the updated record plus the confirmation
/// delivery outcome, present only when a send was attempted.
#[derive(Debug, Clone)]
pub struct StatusChangeOutcome {
    pub reservation: Reservation,
    pub email_sent: Option<bool>,
}

// --- Lifecycle Logic ---

/// The reservation lifecycle controller.
///
/// Generic over the reservation store; the notification gateway arrives as a
/// trait object so SMTP and console delivery stay interchangeable. Every
/// email here is a side effect of an already committed state change, so a
/// failed send is logged (or reported as a soft flag) but never rolls the
/// change back.
pub struct BookingController<R> {
    repo: Arc<R>,
    notifier: Arc<dyn NotificationService<Error = BoxedError>>,
    issuer: VerificationIssuer,
    config: BookingConfig,
}

impl<R: ReservationRepository> BookingController<R> {
    pub fn new(
        repo: Arc<R>,
        notifier: Arc<dyn NotificationService<Error = BoxedError>>,
        config: BookingConfig,
    ) -> Self {
        let issuer = VerificationIssuer::new(config.verification_ttl_hours);
        Self {
            repo,
            notifier,
            issuer,
            config,
        }
    }

    /// Create a reservation: validate every field, persist it as `pending`
    /// with a fresh verification token, then attempt the verification email.
    ///
    /// Returns the created record with the token still on it; the caller
    /// builds the verification link from it.
    pub async fn create_reservation(
        &self,
        input: NewReservation,
    ) -> Result<Reservation, BookingError> {
        validate_new(&input)?;

        let now = Utc::now();
        let (token, expires) = self.issuer.issue(now);
        let reservation = Reservation {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            party_size: input.party_size,
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            status: ReservationStatus::Pending,
            verification_token: Some(token.clone()),
            verification_expires: Some(expires),
            is_verified: false,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repo.insert(&reservation).await?;
        info!("New reservation created: {}", stored.id);

        let message = messages::verification_request(&self.config, &stored, &token);
        match self
            .notifier
            .send_email(&stored.email, &message.subject, &message.body, true)
            .await
        {
            Ok(_) => info!("Verification email sent to: {}", stored.email),
            Err(e) => log_error(e, "Error sending verification email"),
        }

        Ok(stored)
    }

    /// Consume a verification token.
    ///
    /// The consume itself is a single conditional store update, so two
    /// concurrent calls with one token cannot both succeed. A losing call is
    /// then classified by looking the token up again: a record already
    /// verified is a conflict; an expired or unknown token is not found.
    pub async fn verify_reservation(&self, token: &str) -> Result<Reservation, BookingError> {
        if let Some(verified) = self.repo.consume_token(token, Utc::now()).await? {
            info!("Reservation verified: {}", verified.id);

            let message = messages::received_acknowledgment(&self.config, &verified);
            if let Err(e) = self
                .notifier
                .send_email(&verified.email, &message.subject, &message.body, true)
                .await
            {
                log_error(e, "Error sending acknowledgment email");
            }

            return Ok(verified);
        }

        match self.repo.find_by_token(token).await? {
            Some(existing) if existing.is_verified => Err(BookingError::Conflict(
                "Reservation already verified".to_string(),
            )),
            // Still holds the token and is unverified, so the conditional
            // update can only have failed on expiry.
            Some(_) => Err(BookingError::NotFound(
                "Verification token expired".to_string(),
            )),
            None => Err(BookingError::NotFound(
                "Invalid verification token".to_string(),
            )),
        }
    }

    /// Change a reservation's status. Any status may follow any other; the
    /// write is unconditional.
    ///
    /// Moving to `confirmed` also attempts the confirmation email, and the
    /// outcome reports whether that delivery succeeded. A failed send never
    /// rolls the status change back.
    pub async fn change_status(
        &self,
        id: &str,
        new_status: &str,
    ) -> Result<StatusChangeOutcome, BookingError> {
        let Some(status) = ReservationStatus::parse(new_status) else {
            return Err(BookingError::Validation("Invalid status".to_string()));
        };

        let updated = self
            .repo
            .update_status(id, status, Utc::now())
            .await?
            .ok_or_else(|| BookingError::NotFound("Reservation not found".to_string()))?;
        info!("Reservation {} status set to {}", updated.id, status.as_str());

        let email_sent = if status == ReservationStatus::Confirmed {
            let message = messages::booking_confirmation(&self.config, &updated);
            let outcome = self
                .notifier
                .send_email(&updated.email, &message.subject, &message.body, true)
                .await;
            if let Err(e) = &outcome {
                log_error(e, "Error sending confirmation email");
            }
            Some(outcome.is_ok())
        } else {
            None
        };

        Ok(StatusChangeOutcome {
            reservation: updated,
            email_sent,
        })
    }

    /// Apply a partial update. Every supplied field runs through the same
    /// validator as creation; omitted fields keep their stored values.
    /// `updated_at` is refreshed.
    pub async fn update_fields(
        &self,
        id: &str,
        update: ReservationUpdate,
    ) -> Result<Reservation, BookingError> {
        let status = validate_update(&update)?;

        let Some(mut reservation) = self.repo.find_by_id(id).await? else {
            return Err(BookingError::NotFound("Reservation not found".to_string()));
        };

        if let Some(name) = update.name {
            reservation.name = name;
        }
        if let Some(email) = update.email {
            reservation.email = email;
        }
        if let Some(phone) = update.phone {
            reservation.phone = phone;
        }
        if let Some(party_size) = update.party_size {
            reservation.party_size = party_size;
        }
        if let Some(date) = update.date {
            reservation.date = date;
        }
        if let Some(start_time) = update.start_time {
            reservation.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            reservation.end_time = end_time;
        }
        if let Some(status) = status {
            reservation.status = status;
        }
        reservation.updated_at = Utc::now();

        let stored = self
            .repo
            .update(&reservation)
            .await?
            .ok_or_else(|| BookingError::NotFound("Reservation not found".to_string()))?;
        info!("Reservation updated: {}", stored.id);
        Ok(stored)
    }

    /// Delete a reservation.
    pub async fn delete_reservation(&self, id: &str) -> Result<(), BookingError> {
        if self.repo.delete(id).await? {
            info!("Reservation deleted: {}", id);
            Ok(())
        } else {
            Err(BookingError::NotFound("Reservation not found".to_string()))
        }
    }

    /// List reservations, newest first, optionally constrained to an
    /// inclusive date range.
    pub async fn list_reservations(
        &self,
        filter: Option<DateRange>,
    ) -> Result<Vec<Reservation>, BookingError> {
        match filter {
            Some(range) => {
                if !is_valid_date(&range.start) || !is_valid_date(&range.end) {
                    return Err(BookingError::Validation(
                        "Invalid date format. Use YYYY-MM-DD".to_string(),
                    ));
                }
                Ok(self.repo.list_by_date_range(&range).await?)
            }
            None => Ok(self.repo.list().await?),
        }
    }

    /// Fetch a single reservation.
    pub async fn get_reservation(&self, id: &str) -> Result<Reservation, BookingError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| BookingError::NotFound("Reservation not found".to_string()))
    }
}

// --- Field Validation ---

fn validate_new(input: &NewReservation) -> Result<(), BookingError> {
    validate_name(&input.name)?;
    validate_email(&input.email)?;
    validate_phone(&input.phone)?;
    validate_party_size(input.party_size)?;
    validate_date(&input.date)?;
    validate_time(&input.start_time)?;
    validate_time(&input.end_time)?;
    Ok(())
}

/// Validate every supplied field of a partial update, returning the parsed
/// status when one was submitted.
fn validate_update(update: &ReservationUpdate) -> Result<Option<ReservationStatus>, BookingError> {
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    if let Some(email) = &update.email {
        validate_email(email)?;
    }
    if let Some(phone) = &update.phone {
        validate_phone(phone)?;
    }
    if let Some(party_size) = update.party_size {
        validate_party_size(party_size)?;
    }
    if let Some(date) = &update.date {
        validate_date(date)?;
    }
    if let Some(start_time) = &update.start_time {
        validate_time(start_time)?;
    }
    if let Some(end_time) = &update.end_time {
        validate_time(end_time)?;
    }
    update
        .status
        .as_deref()
        .map(|raw| {
            ReservationStatus::parse(raw)
                .ok_or_else(|| BookingError::Validation("Invalid status".to_string()))
        })
        .transpose()
}

fn validate_name(value: &str) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        return Err(BookingError::Validation("name is required".to_string()));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), BookingError> {
    if !is_valid_email(value) {
        return Err(BookingError::Validation(format!(
            "{} is not a valid email address!",
            value
        )));
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), BookingError> {
    if !is_valid_phone(value) {
        return Err(BookingError::Validation(format!(
            "{} is not a valid phone number!",
            value
        )));
    }
    Ok(())
}

fn validate_party_size(value: i64) -> Result<(), BookingError> {
    if !is_valid_party_size(value) {
        return Err(BookingError::Validation(format!(
            "party size must be between {} and {}",
            MIN_PARTY_SIZE, MAX_PARTY_SIZE
        )));
    }
    Ok(())
}

fn validate_date(value: &str) -> Result<(), BookingError> {
    if !is_valid_date(value) {
        return Err(BookingError::Validation(format!(
            "{} is not a valid date format! Use YYYY-MM-DD",
            value
        )));
    }
    Ok(())
}

fn validate_time(value: &str) -> Result<(), BookingError> {
    if !is_valid_time(value) {
        return Err(BookingError::Validation(format!(
            "{} is not a valid time format! Use HH:MM",
            value
        )));
    }
    Ok(())
}
