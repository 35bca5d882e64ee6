//! Notification system with pluggable providers.
//!
//! The core trait `NotificationProvider` delivers a composed
//! [`SlackMessage`]; `NotificationService` resolves the webhook and builds
//! the in-stock alert.

pub mod message;
mod provider;
mod slack_provider;

pub mod notification_service;

#[cfg(test)]
pub(crate) mod testing;

pub use message::{Block, SlackMessage, TextObject};
pub use notification_service::NotificationService;
pub use provider::NotificationProvider;
pub use slack_provider::SlackWebhookProvider;
