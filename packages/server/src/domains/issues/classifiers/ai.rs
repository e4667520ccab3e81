//! Language-model classification with keyword fallback.
//!
//! The model gets one attempt per issue. If the classifier was built without
//! a backend, if the call errors or times out, or if the answer breaks the
//! output contract, the keyword classifier answers instead and the model's
//! output is discarded.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::keyword::KeywordClassifier;
use super::parser::parse_ai_response;
use super::prompt::build_prompt;
use super::AnalysisError;
use crate::config::{Config, DEFAULT_LLM_TIMEOUT_SECS};
use crate::domains::issues::models::{Classification, IssueResponse};
use crate::domains::ngos::NgoRoster;
use crate::kernel::{create_ai_client, BaseAI};

pub struct AiClassifier {
    backend: Option<Arc<dyn BaseAI>>,
    model: String,
    timeout: Duration,
    roster: Arc<NgoRoster>,
    fallback: KeywordClassifier,
}

impl AiClassifier {
    pub fn new(backend: Arc<dyn BaseAI>, model: impl Into<String>, roster: Arc<NgoRoster>) -> Self {
        Self {
            backend: Some(backend),
            model: model.into(),
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            fallback: KeywordClassifier::new(roster.clone()),
            roster,
        }
    }

    /// A classifier with no backend: every request goes to the keyword classifier.
    pub fn unavailable(roster: Arc<NgoRoster>) -> Self {
        Self {
            backend: None,
            model: String::new(),
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            fallback: KeywordClassifier::new(roster.clone()),
            roster,
        }
    }

    /// Build from configuration. A missing or unusable credential leaves the
    /// classifier unavailable rather than failing startup.
    pub fn from_config(config: &Config, roster: Arc<NgoRoster>) -> Self {
        match create_ai_client(config) {
            Ok(backend) => {
                info!(model = %config.gemini_model, "AI classifier initialized");
                Self::new(backend, config.gemini_model.clone(), roster)
                    .with_timeout(config.llm_timeout)
            }
            Err(e) => {
                error!(
                    error = %format!("{:#}", e),
                    "Failed to initialize AI classifier, keyword fallback only"
                );
                Self::unavailable(roster)
            }
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Classify an issue. Never fails: problems on the model path produce
    /// [`Classification::Fallback`].
    pub async fn analyze(
        &self,
        issue_text: &str,
        location: &str,
        pincode: Option<&str>,
        image_url: Option<&str>,
    ) -> Classification {
        if image_url.is_some() {
            debug!("image_url provided; image analysis is not supported, ignoring");
        }

        match self.try_analyze(issue_text, location, pincode).await {
            Ok(response) => {
                info!(category = %response.category, "AI classification succeeded");
                Classification::Primary(response)
            }
            Err(reason) => {
                warn!(
                    reason = %reason,
                    "AI classification unavailable, falling back to keyword classification"
                );
                Classification::Fallback {
                    response: self.fallback.classify(issue_text, location),
                    reason,
                }
            }
        }
    }

    async fn try_analyze(
        &self,
        issue_text: &str,
        location: &str,
        pincode: Option<&str>,
    ) -> Result<IssueResponse, AnalysisError> {
        let backend = self.backend.as_ref().ok_or(AnalysisError::Unavailable)?;

        let prompt = build_prompt(&self.roster, issue_text, location, pincode);

        info!(location = %location, model = %self.model, "Sending issue to AI classifier");

        let completion = backend.complete_with_model(&prompt, &self.model);
        let text = tokio::time::timeout(self.timeout, completion)
            .await
            .map_err(|_| AnalysisError::Timeout(self.timeout))?
            .map_err(AnalysisError::Completion)?;

        let response = parse_ai_response(&text)?;

        for name in &response.suggested_ngos {
            if !self.roster.contains(name) {
                warn!(ngo = %name, "AI suggested an NGO that is not in the roster");
            }
        }

        Ok(response)
    }
}
