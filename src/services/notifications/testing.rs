//! Test doubles for notification providers.

use super::message::SlackMessage;
use super::provider::NotificationProvider;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

/// Provider that records every delivery instead of sending it
#[derive(Default)]
pub struct RecordingProvider {
    sent: Mutex<Vec<(String, SlackMessage)>>,
    fail_with: Option<u16>,
}

impl RecordingProvider {
    /// A provider whose endpoint answers every post with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            sent: Mutex::default(),
            fail_with: Some(status),
        }
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<(String, SlackMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationProvider for RecordingProvider {
    async fn send(&self, webhook_url: &str, message: &SlackMessage) -> AppResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((webhook_url.to_string(), message.clone()));

        match self.fail_with {
            Some(code) => Err(AppError::http_status(
                webhook_url,
                StatusCode::from_u16(code).unwrap(),
            )),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
