//! Error types for the Quail client.

use thiserror::Error;

/// Result type alias for Quail client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Quail client.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Application Errors =====
    /// The server answered with an envelope carrying a truthy `code`.
    #[error("{code} | {message} | {method} {url}")]
    Api {
        code: String,
        message: String,
        method: String,
        url: String,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    // ===== I/O Errors =====
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ===== HTTP Errors =====
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    // ===== Internal Errors =====
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an API error from a decoded failure envelope.
    pub fn api(
        code: impl Into<String>,
        message: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
            method: method.into(),
            url: url.into(),
        }
    }

    /// Check if this error came from the server's envelope rather than the transport.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// The server-supplied error code, if this is an API error.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
