// --- File: crates/reservify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via RESERVIFY_DATABASE__URL
}

// --- SMTP Config ---
// Holds non-secret SMTP config. The password is loaded via the env overlay
// (RESERVIFY_SMTP__PASSWORD), never from a committed file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String, // Mandatory, used as the From header
}

// --- Booking Config ---
// Settings the reservation lifecycle needs: branding for outgoing messages,
// the public base URL verification links point at, and how long a
// verification token stays valid.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Hours until a freshly issued verification token expires.
    #[serde(default = "default_verification_ttl_hours")]
    pub verification_ttl_hours: i64,
}

fn default_restaurant_name() -> String {
    "Reservify".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_verification_ttl_hours() -> i64 {
    24
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            restaurant_name: default_restaurant_name(),
            base_url: default_base_url(),
            verification_ttl_hours: default_verification_ttl_hours(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_smtp: bool,
    #[serde(default)]
    pub use_database: bool,

    // Booking settings always exist; every field carries a default
    #[serde(default)]
    pub booking: BookingConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,
}
