//! Configuration management for the group page
//!
//! Configuration is loaded from a TOML file or from environment variables on
//! top of defaults, then validated.

use serde::{Deserialize, Serialize};
use std::env;

mod error;

pub use error::ConfigError;

use crate::core_group::membership::MembershipType;
use crate::logging::{LogConfig, LogLevel};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Subscription widget configuration
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Subscription widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Membership type token put on subscribe links
    pub membership_type: String,

    /// Classes of the subscribe prompt container
    pub subscribe_classes: Vec<String>,

    /// Classes of the membership info container
    pub membership_info_classes: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,

    /// Include timestamps
    pub with_timestamp: bool,

    /// Include target module
    pub with_target: bool,
}

/// Metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Install the Prometheus recorder; counters are no-ops otherwise
    pub enabled: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            membership_type: MembershipType::DEFAULT.to_string(),
            subscribe_classes: vec!["group-subscription-ui".to_string()],
            membership_info_classes: vec!["group-membership-info".to_string()],
        }
    }
}

impl WidgetConfig {
    pub fn membership_type(&self) -> MembershipType {
        MembershipType::new(self.membership_type.clone())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            with_timestamp: true,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Convert into the logging subsystem's configuration
    pub fn to_log_config(&self) -> Result<LogConfig, ConfigError> {
        let level = LogLevel::parse(&self.level)
            .ok_or_else(|| ConfigError::InvalidValue(format!("Invalid log level: {}", self.level)))?;

        Ok(LogConfig::new(level)
            .with_timestamp(self.with_timestamp)
            .with_target(self.with_target)
            .json_format(self.json_format))
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables follow the pattern: GROUPPAGE_<KEY>
    /// Example: GROUPPAGE_LOG_LEVEL=debug
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (environment or a test map)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("GROUPPAGE_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Some(json) = lookup("GROUPPAGE_LOG_JSON") {
            self.logging.json_format = json
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid JSON flag: {}", e)))?;
        }
        if let Some(membership_type) = lookup("GROUPPAGE_MEMBERSHIP_TYPE") {
            self.widget.membership_type = membership_type;
        }
        if let Some(enabled) = lookup("GROUPPAGE_METRICS_ENABLED") {
            self.metrics.enabled = enabled
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid metrics flag: {}", e)))?;
        }
        Ok(())
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError(e.to_string()))?;

        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.widget.membership_type.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "membership_type must not be empty".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, contents).map_err(|e| ConfigError::FileWriteError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.widget.membership_type, "default");
        assert_eq!(config.widget.subscribe_classes, vec!["group-subscription-ui"]);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.widget.membership_type = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_level_validation() {
        let mut config = Config::default();

        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "debug".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GROUPPAGE_LOG_LEVEL", "DEBUG"),
            ("GROUPPAGE_LOG_JSON", "true"),
            ("GROUPPAGE_MEMBERSHIP_TYPE", "premium"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        assert_eq!(config.widget.membership_type().as_str(), "premium");
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_invalid_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(|k| {
            (k == "GROUPPAGE_METRICS_ENABLED").then(|| "sometimes".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grouppage.toml");

        let mut config = Config::default();
        config.logging.level = "warn".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.logging.level, "warn");
        assert_eq!(loaded.widget.membership_type, "default");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[metrics]\nenabled = false\n").unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert!(!loaded.metrics.enabled);
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/nonexistent/grouppage.toml");
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }

    #[test]
    fn test_to_log_config() {
        let mut logging = LoggingConfig::default();
        logging.level = "trace".to_string();
        logging.json_format = true;

        let log_config = logging.to_log_config().unwrap();
        assert_eq!(log_config.level, LogLevel::Trace);
        assert!(log_config.json_format);
    }
}
