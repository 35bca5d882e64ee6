//! Command executor for dispatching CLI commands
//!
//! Wires the HTTP client, checker and notifier for the selected command and
//! returns the text to print on success.

use std::sync::Arc;

use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;
use crate::external::build_http_client;
use crate::services::{
    HttpStockChecker, NotificationService, SlackWebhookProvider, check_only, run,
};

/// Execute a CLI command with the given settings
///
/// # Returns
/// The human-readable result of the command
///
/// # Errors
/// Returns the first error of the run; nothing is retried
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<String> {
    match cli.effective_command() {
        Commands::Run { dry_run: true } => dry_run(&settings),
        Commands::Run { dry_run: false } => {
            settings.target.require_url()?;
            let client = build_http_client(&settings.http)?;
            let checker = HttpStockChecker::new(client.clone())?;
            let notifier = NotificationService::new(
                settings.slack.clone(),
                Arc::new(SlackWebhookProvider::new(client)),
            );

            let outcome = run(&settings, &checker, &notifier).await?;
            Ok(outcome.message().to_string())
        }
        Commands::Check => {
            settings.target.require_url()?;
            let client = build_http_client(&settings.http)?;
            let checker = HttpStockChecker::new(client)?;

            let state = if check_only(&settings, &checker).await? {
                "in stock"
            } else {
                "out of stock"
            };
            Ok(state.to_string())
        }
    }
}

/// Validate configuration without touching the network
fn dry_run(settings: &Settings) -> AppResult<String> {
    settings.validate_for_run()?;
    let target_url = settings.target.require_url()?;

    let webhook = if settings.slack.require_webhook_url().is_ok() {
        "configured"
    } else {
        "not configured"
    };
    let mention = settings.slack.member_id().unwrap_or("none");

    Ok(format!(
        "Configuration is valid\n  target:  {}\n  webhook: {}\n  mention: {}",
        target_url, webhook, mention
    ))
}
