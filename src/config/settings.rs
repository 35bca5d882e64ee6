//! Configuration settings structures for restock-notifier
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/restock-notifier.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

/// Returns the value only when it is present and non-empty
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================================
// Target Configuration
// ============================================================================

/// The product page to poll
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Product page URL (`TARGET_URL`)
    #[serde(default)]
    pub url: Option<String>,
}

impl TargetConfig {
    /// Returns the configured target URL or `MissingTargetUrl`
    pub fn require_url(&self) -> Result<&str, ConfigError> {
        non_empty(&self.url).ok_or(ConfigError::MissingTargetUrl)
    }
}

// ============================================================================
// Slack Configuration
// ============================================================================

/// Incoming-webhook destination for in-stock alerts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Incoming webhook URL (`SLACK_WEBHOOK_URL`)
    ///
    /// Only required once a notification actually has to be sent.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Member to mention in the alert (`SLACK_MEMBER_ID`)
    #[serde(default)]
    pub member_id: Option<String>,
}

impl SlackConfig {
    /// Resolves the webhook URL at send time
    pub fn require_webhook_url(&self) -> Result<&str, ConfigError> {
        non_empty(&self.webhook_url).ok_or(ConfigError::MissingWebhookUrl)
    }

    pub fn member_id(&self) -> Option<&str> {
        non_empty(&self.member_id)
    }
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// Settings shared by the page fetch and the webhook post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Fixed User-Agent; a desktop browser agent is picked when unset
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn user_agent(&self) -> Option<&str> {
        non_empty(&self.user_agent)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: None,
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(console_config, file_config, self.level).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format: LogFormat = self
            .format
            .parse()
            .map_err(|e: anyhow::Error| ConfigError::validation("logger.file.format".to_string(), e.to_string()))?;

        Ok(FileConfig {
            enabled: self.enabled,
            path: PathBuf::from(self.path),
            append: self.append,
            format,
        })
    }
}

// ============================================================================
// Complete Settings
// ============================================================================

/// Complete application settings for one run
///
/// Built once per invocation and passed into the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Product page to check
    #[serde(default)]
    pub target: TargetConfig,

    /// Webhook destination and mention
    #[serde(default)]
    pub slack: SlackConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
