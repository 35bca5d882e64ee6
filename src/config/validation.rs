//! Configuration validation logic
//!
//! The target URL is validated eagerly at startup. The webhook URL is not
//! touched here: it is only resolved when a notification has to be sent.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{HttpConfig, LoggerSettings, Settings, TargetConfig};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl TargetConfig {
    /// Validate the target URL format when one is configured
    ///
    /// Absence is reported separately through [`TargetConfig::require_url`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Ok(url) = self.require_url() else {
            return Ok(());
        };

        let parsed = Url::parse(url).map_err(|e| {
            ConfigError::validation("target.url".to_string(), format!("Invalid URL '{}': {}", url, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::validation(
                "target.url".to_string(),
                format!("URL must use http or https protocol, got '{}'", parsed.scheme()),
            ));
        }

        Ok(())
    }
}

impl HttpConfig {
    /// Validate HTTP client configuration
    ///
    /// # Validation Rules
    /// - Request timeout must be greater than 0
    /// - Connect timeout must be greater than 0
    /// - Connect timeout must not exceed the request timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::validation(
                "http.timeout_secs",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout_secs",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_secs > self.timeout_secs {
            return Err(ConfigError::validation(
                "http.connect_timeout_secs".to_string(),
                format!(
                    "Connect timeout ({}s) cannot exceed request timeout ({}s).",
                    self.connect_timeout_secs, self.timeout_secs
                ),
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level".to_string(),
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.file.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format".to_string(),
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.file.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        if self.file.enabled && self.file.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path cannot be empty when file output is enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate everything that can be checked without knowing the run outcome
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.target.validate()?;
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }

    /// Validate settings and additionally require a target URL
    pub fn validate_for_run(&self) -> Result<(), ConfigError> {
        self.validate()?;
        self.target.require_url()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::SlackConfig;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.target.url = Some("https://shop.example/products/tee".to_string());
        settings
    }

    #[test]
    fn test_valid_settings() {
        assert!(valid_settings().validate_for_run().is_ok());
    }

    #[test]
    fn test_missing_target_fails_run_validation_only() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(matches!(
            settings.validate_for_run(),
            Err(ConfigError::MissingTargetUrl)
        ));
    }

    #[test]
    fn test_missing_webhook_does_not_fail_validation() {
        let mut settings = valid_settings();
        settings.slack = SlackConfig::default();
        assert!(settings.validate_for_run().is_ok());
    }

    #[test]
    fn test_invalid_target_url() {
        let mut settings = valid_settings();
        settings.target.url = Some("not a url".to_string());
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "target.url"));

        settings.target.url = Some("ftp://shop.example/file".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_http_timeouts() {
        let mut http = HttpConfig::default();
        http.timeout_secs = 0;
        assert!(http.validate().is_err());

        let mut http = HttpConfig::default();
        http.connect_timeout_secs = 0;
        assert!(http.validate().is_err());

        let mut http = HttpConfig::default();
        http.timeout_secs = 5;
        http.connect_timeout_secs = 10;
        assert!(http.validate().is_err());
    }

    #[test]
    fn test_logger_validation() {
        let mut logger = LoggerSettings::default();
        logger.level = "verbose".to_string();
        assert!(logger.validate().is_err());

        let mut logger = LoggerSettings::default();
        logger.console.enabled = false;
        assert!(logger.validate().is_err());

        logger.file.enabled = true;
        assert!(logger.validate().is_ok());

        logger.file.path = String::new();
        assert!(logger.validate().is_err());
    }
}
