//! Fetches the target page and evaluates the add-to-cart heuristic.

use super::detection::{StockDetector, StockSignals};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

/// Determines whether the product behind a URL can be purchased
///
/// # Example Implementation
/// ```ignore
/// struct AlwaysInStock;
///
/// #[async_trait]
/// impl StockChecker for AlwaysInStock {
///     async fn check(&self, _url: &str) -> AppResult<bool> {
///         Ok(true)
///     }
/// }
/// ```
#[async_trait]
pub trait StockChecker: Send + Sync {
    /// Returns `true` when the product is in stock
    ///
    /// Performs exactly one attempt; any failure aborts the run.
    async fn check(&self, url: &str) -> AppResult<bool>;
}

/// Stock checker that GETs the product page over HTTP
pub struct HttpStockChecker {
    client: reqwest::Client,
    detector: StockDetector,
}

impl HttpStockChecker {
    pub fn new(client: reqwest::Client) -> AppResult<Self> {
        Ok(Self {
            client,
            detector: StockDetector::new()?,
        })
    }

    /// Fetches the page and returns the raw signals
    pub async fn inspect(&self, url: &str) -> AppResult<StockSignals> {
        let body = self.fetch_page(url).await?;
        Ok(self.detector.detect_html(&body))
    }

    /// Downloads the page body
    ///
    /// The body is decoded with the charset declared in `Content-Type`
    /// (UTF-8 when absent). The response is consumed or dropped before
    /// returning on every path.
    async fn fetch_page(&self, url: &str) -> AppResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::http_status(url, status));
        }

        response.text().await.map_err(|e| AppError::fetch(url, e))
    }
}

#[async_trait]
impl StockChecker for HttpStockChecker {
    async fn check(&self, url: &str) -> AppResult<bool> {
        let signals = self.inspect(url).await?;

        debug!(
            url,
            button_found = signals.button_found,
            disabled = signals.disabled,
            label = %signals.label.trim(),
            "Read add-to-cart signals"
        );

        Ok(signals.in_stock())
    }
}
