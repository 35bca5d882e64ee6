use anyhow::Context;

use super::user_agent::resolve_user_agent;
use crate::config::HttpConfig;
use crate::error::AppResult;

/// Builds the HTTP client shared by the page fetch and the webhook post
///
/// One client is built per run from [`HttpConfig`]:
/// - **Timeouts**: request and connect timeouts apply to both calls
/// - **Compression**: gzip, deflate, brotli and zstd
/// - **User-Agent**: configured value or a random desktop browser agent
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
///
/// # Example
/// ```ignore
/// let client = build_http_client(&HttpConfig::default())?;
/// let response = client.get("https://shop.example/products/tee").send().await?;
/// ```
pub fn build_http_client(config: &HttpConfig) -> AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(resolve_user_agent(config.user_agent()))
        .build()
        .context("Failed to build HTTP client")?;

    Ok(client)
}
