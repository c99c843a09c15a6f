// --- File: crates/reservify_booking/src/token.rs ---
//! Verification token issuing.
//!
//! A token is a one-time credential proving the booking email is reachable.
//! Tokens are 32 cryptographically random bytes, hex encoded, paired with an
//! expiry a configurable number of hours out. Consumption is the store's
//! concern; the issuer only mints.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;

/// Length in characters of an issued token (32 bytes, hex encoded).
pub const TOKEN_LENGTH: usize = 64;

/// Mints verification tokens and their expiry timestamps.
#[derive(Debug, Clone)]
pub struct VerificationIssuer {
    ttl_hours: i64,
}

impl VerificationIssuer {
    /// Create an issuer whose tokens expire `ttl_hours` after issue.
    pub fn new(ttl_hours: i64) -> Self {
        Self { ttl_hours }
    }

    /// Generate a fresh token and its expiry, measured from `now`.
    pub fn issue(&self, now: DateTime<Utc>) -> (String, DateTime<Utc>) {
        let mut rng = rand::thread_rng();
        let mut random_bytes = [0u8; 32];
        rng.fill_bytes(&mut random_bytes);
        (hex::encode(random_bytes), now + Duration::hours(self.ttl_hours))
    }
}
