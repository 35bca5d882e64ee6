//! Restock Notifier Library
//!
//! Checks a product page for an in-stock add-to-cart button and posts a
//! Slack webhook alert when the product can be purchased.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod services;

#[cfg(test)]
mod test_support;

pub use crate::config::Settings;
pub use error::{AppError, AppResult};
pub use services::{RunOutcome, run};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
