//! Console notification service
//!
//! Logs every email instead of delivering it. This is the sender behind
//! deployments without an SMTP section, and the one tests run against.

use reservify_common::services::{BoxFuture, NotificationResult, NotificationService};
use std::convert::Infallible;
use tracing::info;
use uuid::Uuid;

/// Notification service that writes emails to the log
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotificationService;

impl ConsoleNotificationService {
    /// Create a new console notification service
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for ConsoleNotificationService {
    type Error = Infallible;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        // Clone the values to avoid lifetime issues
        let to = to.to_string();
        let subject = subject.to_string();
        let body_bytes = body.len();

        Box::pin(async move {
            info!(
                "Email (not delivered): to={} subject={:?} html={} bytes={}",
                to, subject, is_html, body_bytes
            );
            Ok(NotificationResult {
                id: Uuid::new_v4().to_string(),
                status: "logged".to_string(),
            })
        })
    }
}
