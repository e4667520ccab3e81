//! Error types for the chat completion client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// Chat completion client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, unusable settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, DNS failure, broken body)
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// API error (non-2xx response, rate limit, empty completion)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}
