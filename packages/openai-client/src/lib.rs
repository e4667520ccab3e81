//! Minimal client for OpenAI-compatible chat completion APIs
//!
//! Speaks the `/chat/completions` protocol, which OpenAI serves natively and
//! Google Gemini serves through its OpenAI compatibility endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{ChatRequest, Message, OpenAIClient};
//!
//! let client = OpenAIClient::new(api_key)?
//!     .with_base_url(openai_client::GEMINI_OPENAI_BASE_URL)
//!     .with_timeout(Duration::from_secs(30))?;
//!
//! let response = client
//!     .chat_completion(ChatRequest::new("gemini-2.5-flash").message(Message::user("Hello!")))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, warn};

/// Default base URL for the OpenAI API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Base URL of Gemini's OpenAI-compatible endpoint.
pub const GEMINI_OPENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Chat completion client bound to one credential and endpoint.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAIClient {
    /// Create a client for the given API key.
    ///
    /// Fails when the key is blank or cannot be sent as an HTTP header.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(OpenAIError::Config("API key is empty".into()));
        }
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| OpenAIError::Config("API key contains invalid characters".into()))?;

        Ok(Self {
            http_client: Client::new(),
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
        })
    }

    /// Set a custom base URL (Gemini, Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound every request made by this client to `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OpenAIError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Returns the text of the first choice. A response without any text is an
    /// API error.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                OpenAIError::from_transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Chat completion API error");
            return Err(OpenAIError::Api(format!("{}: {}", status, error_text)));
        }

        let raw: types::ChatResponseRaw = response.json().await.map_err(|e| {
            if e.is_decode() {
                OpenAIError::Parse(e.to_string())
            } else {
                OpenAIError::from_transport(e)
            }
        })?;

        let usage = raw.usage.clone();
        let content = raw
            .into_first_content()
            .ok_or_else(|| OpenAIError::Api("Completion contained no text".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            total_tokens = usage.as_ref().map(|u| u.total_tokens),
            "Chat completion finished"
        );

        Ok(ChatResponse { content, usage })
    }
}
