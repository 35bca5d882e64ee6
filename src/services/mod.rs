//! Service layer: stock checking, notification and the run that ties them.

pub mod messages;
pub mod notifications;
pub mod orchestrator;
pub mod stock;

pub use notifications::{NotificationProvider, NotificationService, SlackWebhookProvider};
pub use orchestrator::{RunOutcome, check_only, run};
pub use stock::{HttpStockChecker, StockChecker};
