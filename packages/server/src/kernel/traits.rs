// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to ask the model, and what to do with the answer, lives in the domains.
//
// Naming convention: Base* for trait names

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a single-message prompt with the given model (returns raw text)
    async fn complete_with_model(&self, prompt: &str, model: &str) -> Result<String>;
}
