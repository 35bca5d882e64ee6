//! CLI argument parsing with clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Checks a product page and posts a Slack alert when it is in stock
#[derive(Parser, Debug)]
#[command(name = "restock-notifier")]
#[command(about = "Checks a product page and posts a Slack alert when it is in stock")]
#[command(long_about = "
restock-notifier fetches a product page, looks at its add-to-cart button and,
when the product can be purchased, posts an alert to a Slack incoming webhook.
Every invocation performs one check; schedule it externally (cron, a cloud
scheduler, a CI timer).

CONFIGURATION (environment):
    TARGET_URL           Product page to check (required)
    SLACK_WEBHOOK_URL    Incoming webhook, required only when notifying
    SLACK_MEMBER_ID      Member to mention in the alert (optional)
    RESTOCK_HTTP__TIMEOUT_SECS, RESTOCK_LOGGER__LEVEL, ...

EXAMPLES:
    # Check and notify
    TARGET_URL=https://shop.example/products/tee restock-notifier

    # Only report the stock state
    restock-notifier check

    # Validate configuration without any network call
    restock-notifier --config restock.toml run --dry-run
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// TOML file with [target], [slack], [http] and [logger] sections.
    /// Environment variables override values from the file. Falls back to
    /// `RESTOCK_CONFIG_FILE` when omitted.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check the product page and notify when it is in stock (default)
    Run {
        /// Validate configuration and exit without any network call
        #[arg(long)]
        dry_run: bool,
    },
    /// Check the product page and print the stock state, never notify
    Check,
}

impl Cli {
    /// Log level implied by `--verbose` / `--quiet`, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }

    /// The command to execute, `run` when none was given
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Run { dry_run: false })
    }
}
