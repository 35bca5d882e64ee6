//! Slack incoming-webhook provider.

use super::message::SlackMessage;
use super::provider::NotificationProvider;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;
use tracing::info;

/// Posts messages as JSON to a Slack incoming webhook
///
/// # Example
/// ```ignore
/// let provider = SlackWebhookProvider::new(client);
/// provider.send("https://hooks.slack.com/services/T/B/X", &message).await?;
/// ```
#[derive(Clone)]
pub struct SlackWebhookProvider {
    client: reqwest::Client,
}

impl SlackWebhookProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationProvider for SlackWebhookProvider {
    async fn send(&self, webhook_url: &str, message: &SlackMessage) -> AppResult<()> {
        let start = Instant::now();
        let body = serde_json::to_vec(message).map_err(AppError::Encoding)?;

        let response = self
            .client
            .post(webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::fetch(webhook_url, e))?;

        let status = response.status();
        // Drop the body before returning; its content is only "ok"
        drop(response);

        if status != StatusCode::OK {
            return Err(AppError::http_status(webhook_url, status));
        }

        info!(
            provider = self.name(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Notification delivered"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "slack"
    }
}
