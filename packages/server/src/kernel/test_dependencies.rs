// Test doubles for the AI backend
//
// Injected into the AI classifier in place of the real LLM client.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::BaseAI;

// =============================================================================
// Mock AI (queued responses, recorded prompts)
// =============================================================================

#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    /// Add a JSON response to the queue (will be serialized)
    pub fn with_json_response(self, data: &serde_json::Value) -> Self {
        self.with_response(data.to_string())
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(prompt, _)| prompt.clone())
            .collect()
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(prompt, _)| prompt.clone())
    }

    /// Get the model used for the last call
    pub fn last_model(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(_, model)| model.clone())
    }

    /// Check if a prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|(prompt, _)| prompt.contains(text))
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete_with_model(&self, prompt: &str, model: &str) -> Result<String> {
        // Record the call
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), model.to_string()));

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            Ok("Mock AI response".to_string())
        }
    }
}

// =============================================================================
// Failing AI (every call errors, like an unreachable or rejecting service)
// =============================================================================

pub struct FailingAI {
    message: String,
}

impl FailingAI {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl BaseAI for FailingAI {
    async fn complete_with_model(&self, _prompt: &str, _model: &str) -> Result<String> {
        Err(anyhow::anyhow!("{}", self.message))
    }
}

// =============================================================================
// Slow AI (answers only after a delay)
// =============================================================================

pub struct SlowAI {
    delay: Duration,
    response: String,
}

impl SlowAI {
    pub fn new(delay: Duration, response: impl Into<String>) -> Self {
        Self {
            delay,
            response: response.into(),
        }
    }
}

#[async_trait]
impl BaseAI for SlowAI {
    async fn complete_with_model(&self, _prompt: &str, _model: &str) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(self.response.clone())
    }
}
