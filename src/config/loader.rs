//! Configuration loader for restock-notifier
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for a specific configuration file
const CONFIG_FILE_ENV: &str = "RESTOCK_CONFIG_FILE";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "RESTOCK";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Bare deployment variables and the keys they override
const DEPLOYMENT_VARS: &[(&str, &str)] = &[
    ("TARGET_URL", "target.url"),
    ("SLACK_WEBHOOK_URL", "slack.webhook_url"),
    ("SLACK_MEMBER_ID", "slack.member_id"),
];

/// Configuration loader that handles layered configuration loading
///
/// Sources, in order of priority:
/// 1. Optional TOML file
/// 2. `RESTOCK_*` environment variables
/// 3. `TARGET_URL`, `SLACK_WEBHOOK_URL`, `SLACK_MEMBER_ID` (highest priority)
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Specific configuration file path
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// An explicit path (from `--config`) wins over `RESTOCK_CONFIG_FILE`.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        let config_file =
            config_file.or_else(|| std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from));
        Self { config_file }
    }

    /// Get the configuration file path, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the configured file does not exist
    /// - configuration parsing fails
    /// - configuration validation fails
    ///
    /// A missing target URL is not reported here; the run reports it
    /// before any network call.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref config_file) = self.config_file {
            builder = Self::add_file_source(builder, config_file)?;
        }

        // RESTOCK_HTTP__TIMEOUT_SECS -> http.timeout_secs
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder = Self::add_deployment_overrides(builder)?;

        builder.build().map_err(ConfigError::from)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(true)))
    }

    /// Apply the bare variables the function was originally deployed with
    ///
    /// Empty values are skipped so that they count as unset.
    fn add_deployment_overrides(
        mut builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        for (var, key) in DEPLOYMENT_VARS {
            let value = std::env::var(var).ok().filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(*key, value)?;
        }
        Ok(builder)
    }
}
