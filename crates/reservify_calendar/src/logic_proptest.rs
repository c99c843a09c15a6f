// --- File: crates/reservify_calendar/src/logic_proptest.rs ---
#[cfg(test)]
mod tests {
    use crate::logic::{CalendarController, SetDateRequest};
    use proptest::prelude::*;
    use reservify_db::{DayStatus, MemoryCalendarRepository};
    use std::sync::Arc;

    // Helper to build a controller over a fresh in-memory store
    fn new_controller() -> CalendarController<MemoryCalendarRepository> {
        CalendarController::new(Arc::new(MemoryCalendarRepository::new()))
    }

    // Helper to run one async controller call per proptest case
    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("failed to build runtime")
            .block_on(future)
    }

    proptest! {
        // Any digit-shaped date that was never written reads back as the
        // available default
        #[test]
        fn test_never_written_dates_read_available(
            year in 1970..2100i32,
            month in 1..13u32,
            day in 1..29u32,
        ) {
            let date = format!("{:04}-{:02}-{:02}", year, month, day);
            let record = block_on(async {
                new_controller().get_date(&date).await
            }).unwrap();

            prop_assert_eq!(record.status, DayStatus::Available);
            prop_assert!(record.note.is_empty(), "note not empty for {}", date);
            prop_assert!(record.blocked_slots.is_empty());
            prop_assert_eq!(record.date, date);
        }

        // Writing then reading yields exactly the stored record
        #[test]
        fn test_set_then_get_round_trips(
            month in 1..13u32,
            day in 1..29u32,
            hour in 0..24u32,
            minute in 0..60u32,
        ) {
            let date = format!("2026-{:02}-{:02}", month, day);
            let slot = format!("{:02}:{:02}", hour, minute);

            let record = block_on(async {
                let controller = new_controller();
                controller
                    .set_date(SetDateRequest {
                        date: date.clone(),
                        status: "unavailable".to_string(),
                        note: None,
                        blocked_slots: Some(vec![slot.clone()]),
                    })
                    .await?;
                controller.get_date(&date).await
            }).unwrap();

            prop_assert_eq!(record.status, DayStatus::Unavailable);
            prop_assert!(record.blocked_slots.contains(&slot), "missing slot {}", slot);
        }

        // Separators other than '-' never pass the shape check
        #[test]
        fn test_slash_dates_are_rejected(
            year in 1970..2100i32,
            month in 1..13u32,
            day in 1..29u32,
        ) {
            let date = format!("{:04}/{:02}/{:02}", year, month, day);
            let result = block_on(async {
                new_controller().get_date(&date).await
            });
            prop_assert!(result.is_err());
        }
    }
}
