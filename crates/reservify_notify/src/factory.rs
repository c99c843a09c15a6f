//! Service factory implementation.
//!
//! This module provides an implementation of the ServiceFactory trait for the
//! notification services. The factory reads the loaded configuration once and
//! decides which sender backs the contract: SMTP when the feature is enabled
//! and the transport builds, console delivery otherwise.

use crate::console::ConsoleNotificationService;
use crate::smtp::SmtpNotificationService;
use reservify_common::is_smtp_enabled;
use reservify_common::services::{
    BoxFuture, BoxedError, NotificationResult, NotificationService, ServiceFactory,
};
use reservify_config::AppConfig;
use std::sync::Arc;
use tracing::{error, info};

/// Wrapper that converts a concrete sender's errors to BoxedError
struct BoxedNotificationService<S> {
    inner: S,
}

impl<S> NotificationService for BoxedNotificationService<S>
where
    S: NotificationService,
{
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        let body = body.to_string();
        let inner = &self.inner;

        Box::pin(async move {
            inner
                .send_email(&to, &subject, &body, is_html)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

/// Service factory for notification delivery.
///
/// The choice of sender is made once, at construction, from the runtime
/// configuration. Callers only ever see the boxed contract.
pub struct NotifyServiceFactory {
    notification_service: Arc<dyn NotificationService<Error = BoxedError>>,
}

impl NotifyServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            notification_service: build_notification_service(&config),
        }
    }
}

fn build_notification_service(
    config: &Arc<AppConfig>,
) -> Arc<dyn NotificationService<Error = BoxedError>> {
    if is_smtp_enabled(config) {
        if let Some(smtp_config) = config.smtp.as_ref() {
            info!("ℹ️ Initializing SMTP notification service...");
            match SmtpNotificationService::new(smtp_config) {
                Ok(service) => {
                    info!("✅ SMTP notification service initialized.");
                    return Arc::new(BoxedNotificationService { inner: service });
                }
                Err(e) => {
                    error!("🚨 Failed to initialize SMTP notification service: {}. Emails will be logged instead.", e);
                }
            }
        }
    } else {
        info!("ℹ️ SMTP disabled via runtime config or missing smtp config section; emails will be logged instead.");
    }

    Arc::new(BoxedNotificationService {
        inner: ConsoleNotificationService::new(),
    })
}

impl ServiceFactory for NotifyServiceFactory {
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        Some(self.notification_service.clone())
    }
}
