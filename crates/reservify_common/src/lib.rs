// --- File: crates/reservify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;      // Error handling
pub mod features;   // Feature flag handling
pub mod logging;    // Logging utilities
pub mod models;     // Core records shared across the workspace
pub mod services;   // Service abstractions
pub mod validation; // Field-level input validators

#[cfg(test)]
mod validation_proptest;

// Re-export error types and utilities for easier access
pub use error::{
    conflict,
    config_error,
    dependency_error,
    internal_error,
    not_found,
    validation_error,
    Context,
    HttpStatusCode,
    ReservifyError,
};

// Re-export logging utilities for easier access
pub use logging::{
    init,
    init_with_level,
    log_error,
    log_result,
};

// Re-export feature flag handling utilities for easier access
pub use features::{is_database_enabled, is_feature_enabled, is_smtp_enabled};

// This crate provides common functionality shared across the workspace:
// the unified error taxonomy, the notification service abstraction,
// logging setup, and the field validators both controllers run.
