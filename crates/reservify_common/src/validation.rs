// --- File: crates/reservify_common/src/validation.rs ---
//! Field-level input validators.
//!
//! Both controllers validate caller input with the same shape checks before
//! touching the store. The checks are deliberately shape-only: a date like
//! `2025-02-31` passes, because the system treats dates and times as opaque
//! keys and never does calendar arithmetic on them.

/// Smallest party a reservation may be created for.
pub const MIN_PARTY_SIZE: i64 = 1;
/// Largest party a reservation may be created for.
pub const MAX_PARTY_SIZE: i64 = 20;

/// Check that a date string has the `YYYY-MM-DD` shape.
///
/// # Arguments
///
/// * `value` - The date string to check
///
/// # Returns
///
/// `true` if the value is four digits, a dash, two digits, a dash, and two digits
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..].iter().all(u8::is_ascii_digit)
}

/// Check that a time string has the 24-hour `HH:MM` shape.
///
/// The hour may be one or two digits (`9:30` and `09:30` both pass) and must
/// be 0-23; the minute is always two digits, 00-59.
pub fn is_valid_time(value: &str) -> bool {
    let Some((hour, minute)) = value.split_once(':') else {
        return false;
    };
    let hour_ok = matches!(hour.len(), 1 | 2)
        && hour.bytes().all(|b| b.is_ascii_digit())
        && hour.parse::<u8>().map(|h| h <= 23).unwrap_or(false);
    let minute_ok = minute.len() == 2
        && minute.bytes().all(|b| b.is_ascii_digit())
        && minute.parse::<u8>().map(|m| m <= 59).unwrap_or(false);
    hour_ok && minute_ok
}

/// Check that an email address looks deliverable.
///
/// Accepts `local@domain` where neither part contains whitespace or a second
/// `@`, and the domain contains a dot with at least one character on each
/// side. Not an RFC 5321 parser; it is the same pragmatic shape check the
/// booking form applies client-side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check that a phone number is exactly ten ASCII digits.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Check that a party size lies in the bookable range (1-20 inclusive).
pub fn is_valid_party_size(value: i64) -> bool {
    (MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&value)
}
