//! SMTP notification service
//!
//! Sends email through a configured relay using lettre's blocking transport.
//! The network I/O runs on the blocking thread pool, never on the async
//! workers.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use reservify_common::services::{BoxFuture, NotificationResult, NotificationService};
use reservify_config::SmtpConfig;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// SMTP-specific error types.
#[derive(Error, Debug)]
pub enum SmtpError {
    /// The relay hostname was rejected while building the transport
    #[error("SMTP relay error: {0}")]
    RelayError(String),

    /// A message could not be assembled from its parts
    #[error("Failed to build email: {0}")]
    MessageError(String),

    /// The relay refused or failed the delivery
    #[error("Failed to send email: {0}")]
    SendError(String),

    /// The blocking send task was cancelled or panicked
    #[error("Email task failed: {0}")]
    TaskError(String),
}

/// SMTP notification service implementation
#[derive(Clone)]
pub struct SmtpNotificationService {
    transport: SmtpTransport,
    from_address: String,
}

impl SmtpNotificationService {
    /// Create a new SMTP notification service
    ///
    /// The relay transport is built once up front; a bad hostname fails
    /// construction rather than the first send.
    ///
    /// # Arguments
    ///
    /// * `config` - The SMTP section of the application configuration
    pub fn new(config: &SmtpConfig) -> Result<Self, SmtpError> {
        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| SmtpError::RelayError(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }
}

impl NotificationService for SmtpNotificationService {
    type Error = SmtpError;

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
        let body = body.to_string();
        let from = self.from_address.clone();
        let transport = self.transport.clone();

        Box::pin(async move {
            debug!("Sending email to: {} subject: {:?}", to, subject);

            let content_type = if is_html {
                ContentType::TEXT_HTML
            } else {
                ContentType::TEXT_PLAIN
            };

            let from_mailbox = from
                .parse()
                .map_err(|e| SmtpError::MessageError(format!("invalid from address: {}", e)))?;
            let to_mailbox = to
                .parse()
                .map_err(|e| SmtpError::MessageError(format!("invalid to address: {}", e)))?;

            let email = Message::builder()
                .from(from_mailbox)
                .to(to_mailbox)
                .subject(subject)
                .header(content_type)
                .body(body)
                .map_err(|e| SmtpError::MessageError(e.to_string()))?;

            let response = tokio::task::spawn_blocking(move || transport.send(&email))
                .await
                .map_err(|e| SmtpError::TaskError(e.to_string()))?
                .map_err(|e| SmtpError::SendError(e.to_string()))?;

            Ok(NotificationResult {
                id: Uuid::new_v4().to_string(),
                status: format!("sent: {}", response.code()),
            })
        })
    }
}
