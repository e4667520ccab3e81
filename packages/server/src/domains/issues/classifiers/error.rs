use std::time::Duration;

use thiserror::Error;

/// Why the language-model path could not produce a response.
///
/// Never surfaces to API callers: every variant is recovered by the keyword
/// classifier. Kept for logging and for tests asserting which path ran.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("AI classifier is not configured")]
    Unavailable,

    #[error("AI completion timed out after {0:?}")]
    Timeout(Duration),

    #[error("AI completion failed: {0:#}")]
    Completion(anyhow::Error),

    #[error("Invalid JSON in AI response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("AI response is not a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl AnalysisError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// True when the model answered but the answer broke the output contract.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson(_)
                | Self::NotAnObject
                | Self::MissingField(_)
                | Self::InvalidField { .. }
        )
    }
}
