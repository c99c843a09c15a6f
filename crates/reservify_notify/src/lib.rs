//! Email delivery for Reservify
//!
//! This crate provides the implementations behind the
//! `reservify_common::services::NotificationService` contract: an SMTP sender
//! for deployments with a mail relay, and a console sender that logs instead
//! of delivering for everything else. The factory picks between them from the
//! loaded configuration.

pub mod console;
pub mod factory;
/// This module provides the SMTP notification service implementation.
pub mod smtp;

pub use console::ConsoleNotificationService;
pub use factory::NotifyServiceFactory;
pub use smtp::{SmtpError, SmtpNotificationService};
