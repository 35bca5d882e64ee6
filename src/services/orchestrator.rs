//! One check/notify run.
//!
//! ```text
//! Start --(target URL)--> Checking --in stock--> Notifying --> Done(summary)
//!   |                        |--out of stock---------------> Done(fixed notice)
//!   +--> Failed <------------+---------------------------+
//! ```
//!
//! Nothing is remembered between runs: every in-stock run notifies again.

use super::messages::{OUT_OF_STOCK_RESULT, in_stock_summary};
use super::notifications::NotificationService;
use super::stock::StockChecker;
use crate::config::Settings;
use crate::error::{AppResult, error_chain};
use tracing::{error, info};

/// Terminal state of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The product is available and the alert was acknowledged
    Notified { message: String },
    /// The product is unavailable; nothing was sent
    OutOfStock,
}

impl RunOutcome {
    /// Human-readable result of the run
    pub fn message(&self) -> &str {
        match self {
            RunOutcome::Notified { message } => message,
            RunOutcome::OutOfStock => OUT_OF_STOCK_RESULT,
        }
    }
}

/// Checks the target page and, when it is in stock, sends the alert
///
/// # Errors
/// - `MissingTargetUrl` before any network call
/// - any checker error, in which case no notification is attempted
/// - any notifier error (logged before it is returned)
pub async fn run(
    settings: &Settings,
    checker: &dyn StockChecker,
    notifier: &NotificationService,
) -> AppResult<RunOutcome> {
    let target_url = settings.target.require_url()?;
    let member_id = settings.slack.member_id();
    if member_id.is_none() {
        info!("SLACK_MEMBER_ID is not set, notification will be sent without mention");
    }

    info!(target_url, "Checking stock");
    if !checker.check(target_url).await? {
        info!(target_url, "Product is sold out, no notification sent");
        return Ok(RunOutcome::OutOfStock);
    }

    info!(target_url, "Product is in stock, notifying");
    let message = in_stock_summary(target_url);
    if let Err(e) = notifier.send_alert(&message, target_url, member_id).await {
        error!(error = %error_chain(&e), "Failed to send Slack notification");
        return Err(e);
    }

    Ok(RunOutcome::Notified { message })
}

/// Runs only the checking step, never notifying
pub async fn check_only(settings: &Settings, checker: &dyn StockChecker) -> AppResult<bool> {
    let target_url = settings.target.require_url()?;
    info!(target_url, "Checking stock");
    checker.check(target_url).await
}
