//! CLI module for restock-notifier
//!
//! - Argument parsing with clap
//! - Configuration loading with CLI overrides
//! - Command execution

pub mod executor;
pub mod parser;
pub mod validation;

pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::{ConfigError, ConfigLoader, Settings};
use crate::logger::LoggerConfig;

/// Load settings from the config file and environment
pub fn load_config(cli: &Cli) -> Result<Settings, ConfigError> {
    ConfigLoader::new(cli.config.clone()).load()
}

/// Build the logger configuration, applying `--verbose` / `--quiet`
pub fn logger_config(cli: &Cli, settings: &Settings) -> Result<LoggerConfig, ConfigError> {
    let config = settings.logger.clone().into_logger_config()?;
    Ok(match cli.log_level_override() {
        Some(level) => config.with_level(level),
        None => config,
    })
}
