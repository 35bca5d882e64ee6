//! Core notification provider trait.
//!
//! Providers deliver an already composed message to a webhook endpoint.
//! Resolving the endpoint and composing the message is left to
//! [`NotificationService`](super::NotificationService).

use super::message::SlackMessage;
use crate::error::AppResult;
use async_trait::async_trait;

/// Delivers messages to a webhook endpoint
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// One successful call is exactly one delivery: nothing is retried or
/// deduplicated.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Posts `message` to `webhook_url`
    ///
    /// # Returns
    /// `Ok(())` once the endpoint acknowledged the message with 200 OK
    async fn send(&self, webhook_url: &str, message: &SlackMessage) -> AppResult<()>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}
