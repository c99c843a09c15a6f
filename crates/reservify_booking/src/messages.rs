// --- File: crates/reservify_booking/src/messages.rs ---
//! Notification payloads for the reservation lifecycle.
//!
//! Three messages leave the system: a verification request at creation, a
//! "request received" acknowledgment once the email is verified, and a
//! booking confirmation when staff confirm. All are plain formatted HTML
//! parameterized by the restaurant name and public base URL from config.

use reservify_common::models::Reservation;
use reservify_config::BookingConfig;

/// A rendered email: subject line plus HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

// The booking summary list shared by all three messages.
fn details_list(reservation: &Reservation) -> String {
    format!(
        r#"<ul>
  <li>Name: {}</li>
  <li>Date: {}</li>
  <li>Time: {} - {}</li>
  <li>Guests: {}</li>
  <li>Phone: {}</li>
</ul>"#,
        reservation.name,
        reservation.date,
        reservation.start_time,
        reservation.end_time,
        reservation.party_size,
        reservation.phone,
    )
}

/// Build the verification request sent right after creation.
///
/// The link embeds the raw token; following it is what consumes the token.
pub fn verification_request(
    config: &BookingConfig,
    reservation: &Reservation,
    token: &str,
) -> EmailMessage {
    let link = format!("{}/api/reservations/verify/{}", config.base_url, token);
    EmailMessage {
        subject: format!("Verify your {} Reservation Email", config.restaurant_name),
        body: format!(
            r#"<p>Dear {name},</p>
<p>Thank you for your reservation request at {restaurant}.</p>
<p>Please verify your email address by clicking the link below:</p>
<p><a href="{link}">Verify Email Address</a></p>
<p>Your Reservation Details:</p>
{details}
<p>Best regards,<br/>{restaurant} Team</p>"#,
            name = reservation.name,
            restaurant = config.restaurant_name,
            link = link,
            details = details_list(reservation),
        ),
    }
}

/// Build the acknowledgment sent once the email address is verified.
///
/// Distinct from the booking confirmation: the request still awaits staff
/// review at this point, and the wording says so.
pub fn received_acknowledgment(config: &BookingConfig, reservation: &Reservation) -> EmailMessage {
    EmailMessage {
        subject: format!("Your {} Reservation Request", config.restaurant_name),
        body: format!(
            r#"<p>Dear {name},</p>
<p>Your email address has been verified and we have received your reservation request at {restaurant}.</p>
<p>Your Reservation Details:</p>
{details}
<p>Our team will review your request and you will receive another email once your booking is confirmed.</p>
<p>Best regards,<br/>{restaurant} Team</p>"#,
            name = reservation.name,
            restaurant = config.restaurant_name,
            details = details_list(reservation),
        ),
    }
}

/// Build the confirmation sent when staff move a reservation to `confirmed`.
pub fn booking_confirmation(config: &BookingConfig, reservation: &Reservation) -> EmailMessage {
    EmailMessage {
        subject: format!("Your {} Reservation is Confirmed", config.restaurant_name),
        body: format!(
            r#"<p>Dear {name},</p>
<p>Your reservation at {restaurant} has been confirmed.</p>
<p>Your Reservation Details:</p>
{details}
<p>We look forward to welcoming you!</p>
<p>Best regards,<br/>{restaurant} Team</p>"#,
            name = reservation.name,
            restaurant = config.restaurant_name,
            details = details_list(reservation),
        ),
    }
}
