use crate::config::error::ConfigError;
use reqwest::StatusCode;
use thiserror::Error;

/// Application-wide error type for a single check/notify run.
///
/// Every variant is terminal for the run; nothing is retried internally.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required setting is missing or malformed
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Transport-level failure (connect, DNS, timeout, body read)
    #[error("Request to {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with something other than 200 OK
    #[error("Unexpected status from {url}: {code} {status_text}")]
    HttpStatus {
        url: String,
        code: u16,
        status_text: String,
    },

    /// The fetched document could not be read as markup
    #[error("Failed to parse HTML document: {message}")]
    Parse { message: String },

    /// The webhook payload could not be serialized
    #[error("Failed to encode notification payload")]
    Encoding(#[source] serde_json::Error),

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Creates an `HttpStatus` error from a response status
    pub fn http_status(url: impl Into<String>, status: StatusCode) -> Self {
        AppError::HttpStatus {
            url: url.into(),
            code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Creates a `Fetch` error for the given URL
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Fetch {
            url: url.into(),
            source,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        AppError::Parse {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal(error)
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

/// Renders an error and all of its sources as `outer: inner: root`
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
