//! Feature flag handling for the Reservify workspace.
//!
//! Features here are runtime toggles, driven by configuration values rather
//! than cargo features: a feature counts as enabled only when its `use_*`
//! flag is set and its configuration section is present.
//!
//! ## Available Features
//!
//! - `smtp`: delivers notifications over SMTP instead of the console gateway
//! - `database`: backs the repositories with SQL storage instead of memory

use reservify_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
///
/// # Returns
///
/// `true` if the feature is enabled, `false` otherwise
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the SMTP notification feature is enabled at runtime.
pub fn is_smtp_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_smtp, config.smtp.as_ref())
}

/// Check if the SQL storage feature is enabled at runtime.
pub fn is_database_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_database, config.database.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservify_config::DatabaseConfig;

    #[test]
    fn feature_requires_flag_and_section() {
        let mut config = AppConfig::default();
        config.use_database = true;
        let config = Arc::new(config);
        // flag set but no section
        assert!(!is_database_enabled(&config));

        let mut config = AppConfig::default();
        config.use_database = true;
        config.database = Some(DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        });
        assert!(is_database_enabled(&Arc::new(config)));
    }

    #[test]
    fn section_alone_is_not_enough() {
        let mut config = AppConfig::default();
        config.database = Some(DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        });
        assert!(!is_database_enabled(&Arc::new(config)));
        assert!(!is_smtp_enabled(&Arc::new(AppConfig::default())));
    }
}
