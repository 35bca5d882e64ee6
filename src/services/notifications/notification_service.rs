//! Notification service for in-stock alerts.
//!
//! Resolves the webhook endpoint at send time, composes the alert and hands
//! it to a [`NotificationProvider`].

use super::message::SlackMessage;
use super::provider::NotificationProvider;
use crate::config::SlackConfig;
use crate::error::AppResult;
use std::sync::Arc;
use tracing::debug;

/// Sends in-stock alerts through the configured provider
#[derive(Clone)]
pub struct NotificationService {
    slack: SlackConfig,
    provider: Arc<dyn NotificationProvider>,
}

impl NotificationService {
    /// Creates a new NotificationService
    ///
    /// The webhook URL is not checked here; a missing URL only fails
    /// [`send_alert`](Self::send_alert).
    pub fn new(slack: SlackConfig, provider: Arc<dyn NotificationProvider>) -> Self {
        Self { slack, provider }
    }

    /// Composes and delivers the in-stock alert
    ///
    /// # Arguments
    /// * `message` - Plain-text summary of the alert
    /// * `target_url` - Product page linked from the alert
    /// * `member_id` - Member to mention, if any
    ///
    /// # Errors
    /// `MissingWebhookUrl` when no webhook is configured, otherwise whatever
    /// the provider reports
    pub async fn send_alert(
        &self,
        message: &str,
        target_url: &str,
        member_id: Option<&str>,
    ) -> AppResult<()> {
        let webhook_url = self.slack.require_webhook_url()?;
        let payload = SlackMessage::in_stock_alert(message, target_url, member_id);

        debug!(
            provider = self.provider.name(),
            mention = member_id.is_some(),
            "Sending in-stock alert"
        );

        self.provider.send(webhook_url, &payload).await
    }
}
