// --- File: crates/reservify_calendar/src/logic_test.rs ---
#[cfg(test)]
mod tests {
    use crate::logic::{CalendarController, CalendarError, SetDateRequest};
    use reservify_db::{CalendarDay, DayStatus, MemoryCalendarRepository};
    use std::sync::Arc;

    fn controller() -> CalendarController<MemoryCalendarRepository> {
        CalendarController::new(Arc::new(MemoryCalendarRepository::new()))
    }

    fn set_request(date: &str, status: &str) -> SetDateRequest {
        SetDateRequest {
            date: date.to_string(),
            status: status.to_string(),
            note: None,
            blocked_slots: None,
        }
    }

    #[tokio::test]
    async fn never_written_date_reads_back_available() {
        let controller = controller();
        let day = controller.get_date("2025-12-25").await.unwrap();
        assert_eq!(day, CalendarDay::available("2025-12-25"));
    }

    #[tokio::test]
    async fn malformed_dates_are_rejected() {
        let controller = controller();
        for bad in ["25-12-2025", "2025/12/25", "2025-12-2", "tomorrow"] {
            let err = controller.get_date(bad).await.unwrap_err();
            assert!(
                matches!(err, CalendarError::Validation(_)),
                "{} should fail the shape check",
                bad
            );
        }
        // The same shape check guards deletion
        let err = controller.delete_date("25-12-2025").await.unwrap_err();
        assert!(matches!(err, CalendarError::Validation(_)));
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let controller = controller();
        let mut request = set_request("2025-12-25", "unavailable");
        request.note = Some("Closed for holiday".to_string());
        request.blocked_slots = Some(vec!["12:00".to_string(), "13:00".to_string()]);
        controller.set_date(request).await.unwrap();

        let day = controller.get_date("2025-12-25").await.unwrap();
        assert_eq!(day.status, DayStatus::Unavailable);
        assert_eq!(day.note, "Closed for holiday");
        let slots: Vec<&str> = day.blocked_slots.iter().map(|s| s.as_str()).collect();
        assert_eq!(slots, vec!["12:00", "13:00"]);
    }

    #[tokio::test]
    async fn set_date_is_idempotent() {
        let controller = controller();
        let mut request = set_request("2025-12-25", "busy");
        request.note = Some("Private party".to_string());
        request.blocked_slots = Some(vec!["19:00".to_string()]);

        let first = controller.set_date(request.clone()).await.unwrap();
        let second = controller.set_date(request).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn statuses_parse_case_insensitively() {
        let controller = controller();
        let day = controller
            .set_date(set_request("2025-12-25", "Tentative"))
            .await
            .unwrap();
        assert_eq!(day.status, DayStatus::Tentative);

        let err = controller
            .set_date(set_request("2025-12-25", "closed"))
            .await
            .unwrap_err();
        assert!(matches!(err, CalendarError::Validation(msg) if msg == "Invalid status"));
    }

    #[tokio::test]
    async fn omitted_slots_preserve_stored_ones() {
        let controller = controller();
        let mut request = set_request("2025-12-25", "unavailable");
        request.blocked_slots = Some(vec!["12:00".to_string()]);
        controller.set_date(request).await.unwrap();

        // Slots omitted: the stored slots stay
        let mut relabel = set_request("2025-12-25", "busy");
        relabel.note = Some("Half day".to_string());
        let day = controller.set_date(relabel).await.unwrap();
        assert!(day.blocked_slots.contains("12:00"));

        // Explicit empty list: slots cleared
        let mut clear = set_request("2025-12-25", "busy");
        clear.blocked_slots = Some(vec![]);
        let day = controller.set_date(clear).await.unwrap();
        assert!(day.blocked_slots.is_empty());
    }

    #[tokio::test]
    async fn omitted_note_writes_the_empty_default() {
        let controller = controller();
        let mut request = set_request("2025-12-25", "unavailable");
        request.note = Some("Closed".to_string());
        controller.set_date(request).await.unwrap();

        controller
            .set_date(set_request("2025-12-25", "unavailable"))
            .await
            .unwrap();
        let day = controller.get_date("2025-12-25").await.unwrap();
        assert!(day.note.is_empty());
    }

    #[tokio::test]
    async fn bad_slot_shapes_are_rejected() {
        let controller = controller();
        let mut request = set_request("2025-12-25", "unavailable");
        request.blocked_slots = Some(vec!["12:00".to_string(), "24:00".to_string()]);
        let err = controller.set_date(request).await.unwrap_err();
        match err {
            CalendarError::Validation(msg) => {
                assert_eq!(msg, "Invalid time format: 24:00. Use HH:MM")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn duplicate_slots_collapse() {
        let controller = controller();
        let mut request = set_request("2025-12-25", "unavailable");
        request.blocked_slots = Some(vec!["12:00".to_string(), "12:00".to_string()]);
        let day = controller.set_date(request).await.unwrap();
        assert_eq!(day.blocked_slots.len(), 1);
    }

    #[tokio::test]
    async fn deleting_is_a_no_op_for_missing_dates() {
        let controller = controller();
        controller
            .set_date(set_request("2025-12-25", "unavailable"))
            .await
            .unwrap();

        controller.delete_date("2025-12-25").await.unwrap();
        // A second delete still succeeds
        controller.delete_date("2025-12-25").await.unwrap();
        let day = controller.get_date("2025-12-25").await.unwrap();
        assert_eq!(day.status, DayStatus::Available);
    }

    #[tokio::test]
    async fn get_all_dates_lists_in_date_order() {
        let controller = controller();
        for date in ["2026-01-02", "2025-12-25"] {
            controller
                .set_date(set_request(date, "unavailable"))
                .await
                .unwrap();
        }
        let all = controller.get_all_dates().await.unwrap();
        let dates: Vec<&str> = all.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-12-25", "2026-01-02"]);
    }
}
