// --- File: crates/reservify_booking/src/logic_test.rs ---
#[cfg(test)]
mod tests {
    use crate::logic::{BookingController, BookingError, NewReservation, ReservationUpdate};
    use chrono::{Duration, TimeZone, Utc};
    use reservify_common::services::{
        BoxFuture, BoxedError, NotificationResult, NotificationService,
    };
    use reservify_config::BookingConfig;
    use reservify_db::repositories::ReservationRepository;
    use reservify_db::{DateRange, MemoryReservationRepository, Reservation, ReservationStatus};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct SentEmail {
        to: String,
        subject: String,
        body: String,
        is_html: bool,
    }

    /// Recording gateway fake: captures every delivered email and can be
    /// switched to fail, standing in for a relay outage.
    struct RecordingNotifier {
        sent: Mutex<Vec<SentEmail>>,
        fail: AtomicBool,
    }

    impl RecordingNotifier {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                fail: AtomicBool::new(false),
            })
        }

        fn fail_sends(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        fn sent(&self) -> Vec<SentEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl NotificationService for RecordingNotifier {
        type Error = BoxedError;

        fn send_email(
            &self,
            to: &str,
            subject: &str,
            body: &str,
            is_html: bool,
        ) -> BoxFuture<'_, NotificationResult, Self::Error> {
            let email = SentEmail {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
                is_html,
            };
            Box::pin(async move {
                if self.fail.load(Ordering::SeqCst) {
                    return Err(BoxedError(Box::new(std::io::Error::other("relay down"))));
                }
                self.sent.lock().unwrap().push(email);
                Ok(NotificationResult {
                    id: "test".to_string(),
                    status: "recorded".to_string(),
                })
            })
        }
    }

    fn fixture() -> (
        BookingController<MemoryReservationRepository>,
        Arc<MemoryReservationRepository>,
        Arc<RecordingNotifier>,
    ) {
        let repo = Arc::new(MemoryReservationRepository::new());
        let notifier = RecordingNotifier::new();
        let controller = BookingController::new(
            Arc::clone(&repo),
            notifier.clone() as Arc<dyn NotificationService<Error = BoxedError>>,
            BookingConfig::default(),
        );
        (controller, repo, notifier)
    }

    fn booking_request() -> NewReservation {
        NewReservation {
            name: "Morag MacLeod".to_string(),
            email: "morag@example.com".to_string(),
            phone: "0123456789".to_string(),
            party_size: 4,
            date: "2025-12-24".to_string(),
            start_time: "18:00".to_string(),
            end_time: "20:00".to_string(),
        }
    }

    fn stored_reservation(id: &str, date: &str, minutes: i64) -> Reservation {
        let created = Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap()
            + Duration::minutes(minutes);
        Reservation {
            id: id.to_string(),
            name: "Morag MacLeod".to_string(),
            email: "morag@example.com".to_string(),
            phone: "0123456789".to_string(),
            party_size: 2,
            date: date.to_string(),
            start_time: "18:00".to_string(),
            end_time: "20:00".to_string(),
            status: ReservationStatus::Pending,
            verification_token: None,
            verification_expires: None,
            is_verified: false,
            created_at: created,
            updated_at: created,
        }
    }

    #[tokio::test]
    async fn create_issues_a_pending_reservation_with_token() {
        let (controller, _repo, notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();

        assert_eq!(created.status, ReservationStatus::Pending);
        assert!(!created.is_verified);
        let token = created.verification_token.clone().unwrap();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        let expires = created.verification_expires.unwrap();
        assert_eq!(expires - created.created_at, Duration::hours(24));

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "morag@example.com");
        assert_eq!(sent[0].subject, "Verify your Reservify Reservation Email");
        assert!(sent[0].is_html);
        let link = format!("http://localhost:8080/api/reservations/verify/{}", token);
        assert!(sent[0].body.contains(&link));
    }

    #[tokio::test]
    async fn each_malformed_field_is_rejected() {
        let (controller, repo, notifier) = fixture();
        let cases = vec![
            (
                "blank name",
                NewReservation {
                    name: "   ".to_string(),
                    ..booking_request()
                },
            ),
            (
                "bad email",
                NewReservation {
                    email: "not-an-email".to_string(),
                    ..booking_request()
                },
            ),
            (
                "short phone",
                NewReservation {
                    phone: "12345".to_string(),
                    ..booking_request()
                },
            ),
            (
                "party of zero",
                NewReservation {
                    party_size: 0,
                    ..booking_request()
                },
            ),
            (
                "party of twenty-one",
                NewReservation {
                    party_size: 21,
                    ..booking_request()
                },
            ),
            (
                "reversed date",
                NewReservation {
                    date: "24-12-2025".to_string(),
                    ..booking_request()
                },
            ),
            (
                "hour out of range",
                NewReservation {
                    start_time: "25:00".to_string(),
                    ..booking_request()
                },
            ),
            (
                "minute out of range",
                NewReservation {
                    end_time: "18:60".to_string(),
                    ..booking_request()
                },
            ),
        ];

        for (label, input) in cases {
            let err = controller.create_reservation(input).await.unwrap_err();
            assert!(
                matches!(err, BookingError::Validation(_)),
                "{} should fail validation",
                label
            );
        }
        // Nothing persisted, nothing sent
        assert!(repo.list().await.unwrap().is_empty());
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn failed_verification_email_does_not_fail_creation() {
        let (controller, repo, notifier) = fixture();
        notifier.fail_sends(true);

        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();

        assert!(repo.find_by_id(&created.id).await.unwrap().is_some());
        assert!(created.verification_token.is_some());
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn verify_marks_the_reservation_and_acknowledges() {
        let (controller, _repo, notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();
        let token = created.verification_token.unwrap();

        let verified = controller.verify_reservation(&token).await.unwrap();
        assert!(verified.is_verified);
        assert!(verified.verification_token.is_none());
        assert!(verified.verification_expires.is_none());

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].subject, "Your Reservify Reservation Request");
        assert!(sent[1].body.contains("has been verified"));
    }

    #[tokio::test]
    async fn verifying_twice_reports_an_invalid_token() {
        let (controller, _repo, _notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();
        let token = created.verification_token.unwrap();
        controller.verify_reservation(&token).await.unwrap();

        // The consume cleared the token, so a replay finds nothing
        let err = controller.verify_reservation(&token).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
        assert_eq!(err.to_string(), "Invalid verification token");
    }

    #[tokio::test]
    async fn already_verified_records_read_as_conflicts() {
        let (controller, repo, _notifier) = fixture();
        let mut seeded = stored_reservation("seed", "2025-12-24", 0);
        seeded.verification_token = Some("seed-token".to_string());
        seeded.is_verified = true;
        repo.insert(&seeded).await.unwrap();

        let err = controller.verify_reservation("seed-token").await.unwrap_err();
        assert!(matches!(err, BookingError::Conflict(_)));
        assert_eq!(err.to_string(), "Reservation already verified");
    }

    #[tokio::test]
    async fn expired_tokens_read_as_not_found() {
        let (controller, repo, notifier) = fixture();
        let mut seeded = stored_reservation("old", "2025-12-24", 0);
        seeded.verification_token = Some("old-token".to_string());
        seeded.verification_expires = Some(Utc::now() - Duration::hours(1));
        repo.insert(&seeded).await.unwrap();

        let err = controller.verify_reservation("old-token").await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
        assert_eq!(err.to_string(), "Verification token expired");

        // Still unverified, and no acknowledgment left the system
        let unchanged = repo.find_by_id("old").await.unwrap().unwrap();
        assert!(!unchanged.is_verified);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn unknown_tokens_read_as_not_found() {
        let (controller, _repo, _notifier) = fixture();
        let err = controller.verify_reservation("deadbeef").await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
        assert_eq!(err.to_string(), "Invalid verification token");
    }

    #[tokio::test]
    async fn confirming_sends_the_confirmation_email() {
        let (controller, _repo, notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();

        let outcome = controller
            .change_status(&created.id, "confirmed")
            .await
            .unwrap();
        assert_eq!(outcome.reservation.status, ReservationStatus::Confirmed);
        assert_eq!(outcome.email_sent, Some(true));

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].subject, "Your Reservify Reservation is Confirmed");
        assert!(sent[1].body.contains("Guests: 4"));
        assert!(sent[1].body.contains("Time: 18:00 - 20:00"));
    }

    #[tokio::test]
    async fn confirmation_failure_is_a_soft_flag() {
        let (controller, repo, notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();
        notifier.fail_sends(true);

        let outcome = controller
            .change_status(&created.id, "confirmed")
            .await
            .unwrap();
        assert_eq!(outcome.email_sent, Some(false));

        // The status change committed regardless
        let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.status, ReservationStatus::Confirmed);
    }

    #[tokio::test]
    async fn other_statuses_skip_the_email() {
        let (controller, _repo, notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();

        let outcome = controller
            .change_status(&created.id, "rejected")
            .await
            .unwrap();
        assert_eq!(outcome.reservation.status, ReservationStatus::Rejected);
        assert_eq!(outcome.email_sent, None);
        // Only the verification email from creation
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn unknown_statuses_are_rejected() {
        let (controller, repo, _notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();

        for bad in ["archived", "Confirmed", "CONFIRMED", ""] {
            let err = controller.change_status(&created.id, bad).await.unwrap_err();
            assert!(
                matches!(err, BookingError::Validation(_)),
                "{:?} should be rejected",
                bad
            );
            assert_eq!(err.to_string(), "Invalid status");
        }

        let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.status, ReservationStatus::Pending);
    }

    #[tokio::test]
    async fn changing_status_of_a_missing_reservation() {
        let (controller, _repo, notifier) = fixture();
        let err = controller
            .change_status("missing", "confirmed")
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
        assert_eq!(err.to_string(), "Reservation not found");
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_the_supplied_fields() {
        let (controller, _repo, _notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();

        let update = ReservationUpdate {
            party_size: Some(6),
            status: Some("cancelled".to_string()),
            ..ReservationUpdate::default()
        };
        let updated = controller.update_fields(&created.id, update).await.unwrap();

        assert_eq!(updated.party_size, 6);
        assert_eq!(updated.status, ReservationStatus::Cancelled);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        // Verification state is not caller-assignable
        assert_eq!(updated.verification_token, created.verification_token);
        assert_eq!(updated.is_verified, created.is_verified);
    }

    #[tokio::test]
    async fn update_validates_supplied_values() {
        let (controller, repo, _notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();

        let err = controller
            .update_fields(
                &created.id,
                ReservationUpdate {
                    phone: Some("12345".to_string()),
                    ..ReservationUpdate::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));

        let err = controller
            .update_fields(
                &created.id,
                ReservationUpdate {
                    status: Some("Confirmed".to_string()),
                    ..ReservationUpdate::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid status");

        // Neither attempt touched the record
        let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.phone, created.phone);
        assert_eq!(stored.status, ReservationStatus::Pending);
    }

    #[tokio::test]
    async fn updating_a_missing_reservation() {
        let (controller, _repo, _notifier) = fixture();
        let err = controller
            .update_fields("missing", ReservationUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_reports_not_found() {
        let (controller, _repo, _notifier) = fixture();
        let created = controller
            .create_reservation(booking_request())
            .await
            .unwrap();

        controller.delete_reservation(&created.id).await.unwrap();

        let err = controller.get_reservation(&created.id).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
        let err = controller.delete_reservation(&created.id).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }

    #[tokio::test]
    async fn listing_orders_newest_first_and_filters_by_range() {
        let (controller, repo, _notifier) = fixture();
        repo.insert(&stored_reservation("r1", "2025-12-20", 0))
            .await
            .unwrap();
        repo.insert(&stored_reservation("r2", "2025-12-22", 10))
            .await
            .unwrap();
        repo.insert(&stored_reservation("r3", "2025-12-24", 20))
            .await
            .unwrap();

        let all = controller.list_reservations(None).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r3", "r2", "r1"]);

        let range = DateRange {
            start: "2025-12-21".to_string(),
            end: "2025-12-23".to_string(),
        };
        let ranged = controller.list_reservations(Some(range)).await.unwrap();
        assert_eq!(ranged.len(), 1);
        assert_eq!(ranged[0].id, "r2");
    }

    #[tokio::test]
    async fn range_bounds_must_be_well_formed() {
        let (controller, _repo, _notifier) = fixture();
        let range = DateRange {
            start: "2025-12-21".to_string(),
            end: "23/12/2025".to_string(),
        };
        let err = controller.list_reservations(Some(range)).await.unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
        assert_eq!(err.to_string(), "Invalid date format. Use YYYY-MM-DD");
    }
}
