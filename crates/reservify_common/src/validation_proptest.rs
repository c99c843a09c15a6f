// --- File: crates/reservify_common/src/validation_proptest.rs ---
#[cfg(test)]
mod tests {
    use crate::validation::*;
    use proptest::prelude::*;

    proptest! {
        // Any 4-2-2 digit grouping passes the date check, bookable or not
        #[test]
        fn test_digit_groupings_always_pass_date_check(
            year in 0..10000u32,
            month in 0..100u32,
            day in 0..100u32,
        ) {
            let date = format!("{:04}-{:02}-{:02}", year, month, day);
            prop_assert!(is_valid_date(&date), "date should pass shape check: {}", date);
        }

        // Swapping the separators must fail the date check
        #[test]
        fn test_slash_separated_dates_fail(
            year in 0..10000u32,
            month in 0..100u32,
            day in 0..100u32,
        ) {
            let date = format!("{:04}/{:02}/{:02}", year, month, day);
            prop_assert!(!is_valid_date(&date), "slash date should fail: {}", date);
        }

        // Every in-range hour/minute combination is accepted, padded or not
        #[test]
        fn test_in_range_times_accepted(hour in 0..24u32, minute in 0..60u32) {
            let padded = format!("{:02}:{:02}", hour, minute);
            let bare = format!("{}:{:02}", hour, minute);
            prop_assert!(is_valid_time(&padded), "padded time should pass: {}", padded);
            prop_assert!(is_valid_time(&bare), "bare-hour time should pass: {}", bare);
        }

        // Out-of-range hours and minutes are rejected
        #[test]
        fn test_out_of_range_times_rejected(hour in 24..100u32, minute in 60..100u32) {
            let bad_hour = format!("{:02}:{:02}", hour, 30);
            let bad_minute = format!("{:02}:{:02}", 12, minute);
            prop_assert!(!is_valid_time(&bad_hour), "hour out of range should fail: {}", bad_hour);
            prop_assert!(!is_valid_time(&bad_minute), "minute out of range should fail: {}", bad_minute);
        }

        // Exactly ten digits pass the phone check; one digit more or less fails
        #[test]
        fn test_phone_length_boundary(number in 0..10_000_000_000u64) {
            let ten = format!("{:010}", number);
            prop_assert!(is_valid_phone(&ten), "ten digits should pass: {}", ten);
            prop_assert!(!is_valid_phone(&ten[1..]), "nine digits should fail");
            prop_assert!(!is_valid_phone(&format!("{}0", ten)), "eleven digits should fail");
        }

        // local@domain.tld built from word characters always passes
        #[test]
        fn test_plain_addresses_accepted(
            local in "[a-z][a-z0-9.]{0,10}",
            domain in "[a-z]{1,10}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{}@{}.{}", local, domain, tld);
            prop_assert!(is_valid_email(&email), "email should pass: {}", email);
        }

        // Whitespace anywhere in an address is rejected
        #[test]
        fn test_whitespace_in_address_rejected(
            local in "[a-z]{1,10}",
            domain in "[a-z]{1,10}",
        ) {
            let email = format!("{} @{}.com", local, domain);
            prop_assert!(!is_valid_email(&email), "email with space should fail: {}", email);
        }
    }
}
