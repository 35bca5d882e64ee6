//! Configuration management module for restock-notifier
//!
//! Settings are layered from (lowest to highest priority):
//! 1. An optional TOML file (`--config` or `RESTOCK_CONFIG_FILE`)
//! 2. `RESTOCK_*` environment variables (`RESTOCK_HTTP__TIMEOUT_SECS`)
//! 3. The bare deployment variables `TARGET_URL`, `SLACK_WEBHOOK_URL`
//!    and `SLACK_MEMBER_ID`

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HttpConfig, LoggerSettings, Settings, SlackConfig, TargetConfig};
