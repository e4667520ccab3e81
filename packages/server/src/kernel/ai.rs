// AI implementation over an OpenAI-compatible chat completion endpoint
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::BaseAI;
use crate::config::Config;

/// Build the production AI backend from configuration.
///
/// Fails when no credential is configured or the HTTP client cannot be built;
/// callers treat that as "AI unavailable", not as a fatal error.
pub fn create_ai_client(config: &Config) -> Result<Arc<dyn BaseAI>> {
    let api_key = config
        .gemini_api_key
        .clone()
        .context("GEMINI_API_KEY is not configured")?;

    let client = OpenAIClient::new(api_key)
        .context("Invalid LLM credential")?
        .with_base_url(config.llm_base_url.clone())
        .with_timeout(config.llm_timeout)
        .context("Failed to build LLM HTTP client")?;

    Ok(Arc::new(client))
}

#[async_trait]
impl BaseAI for OpenAIClient {
    async fn complete_with_model(&self, prompt: &str, model: &str) -> Result<String> {
        tracing::debug!(
            prompt_length = prompt.len(),
            model = model,
            "Calling LLM completion API"
        );

        let request = ChatRequest::new(model).message(Message::user(prompt));
        let started = Instant::now();

        let response = self
            .chat_completion(request)
            .await
            .context("LLM completion request failed")?;

        tracing::info!(
            response_length = response.content.len(),
            model = model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "LLM response received"
        );

        Ok(response.content)
    }
}
