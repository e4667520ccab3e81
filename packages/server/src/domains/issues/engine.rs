//! Request orchestration: validate, classify, report which path answered.

use thiserror::Error;
use tracing::info;

use super::classifiers::AiClassifier;
use super::models::{Classification, IssueRequest, ValidationError};

/// Errors the engine surfaces to callers.
///
/// Classifier failures never appear here; they are absorbed by the keyword
/// fallback inside [`AiClassifier::analyze`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),
}

/// Ties request validation to the classifier pair.
///
/// Holds no per-request state, so one instance is shared by every handler.
pub struct RoutingEngine {
    classifier: AiClassifier,
}

impl RoutingEngine {
    pub fn new(classifier: AiClassifier) -> Self {
        Self { classifier }
    }

    pub async fn handle(&self, request: &IssueRequest) -> Result<Classification, EngineError> {
        request.validate()?;

        let classification = self
            .classifier
            .analyze(
                &request.issue_text,
                &request.location,
                request.pincode.as_deref(),
                request.image_url.as_deref(),
            )
            .await;

        let response = classification.response();
        info!(
            source = classification.source().as_str(),
            category = %response.category,
            severity = %response.severity,
            impact_score = response.impact_score,
            ngo_count = response.suggested_ngos.len(),
            "Issue classified"
        );

        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::common::IssueCategory;
    use crate::domains::issues::classifiers::KeywordClassifier;
    use crate::domains::issues::models::{ClassificationSource, Severity};
    use crate::domains::ngos::NgoRoster;
    use crate::kernel::MockAI;

    fn request() -> IssueRequest {
        IssueRequest::new("Water pipe burst near school, urgent help needed", "Kothrud")
            .with_pincode("411038")
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_classifier() {
        let mock = MockAI::new();
        let engine = RoutingEngine::new(AiClassifier::new(
            Arc::new(mock.clone()),
            "m",
            Arc::new(NgoRoster::builtin()),
        ));

        let err = engine
            .handle(&request().with_pincode("4110"))
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::Validation(ValidationError::InvalidPincode)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ai_path() {
        let mock = MockAI::new().with_json_response(&serde_json::json!({
            "category": "Water",
            "severity": "Critical",
            "impact_score": 9,
            "suggested_ngos": ["CleanWater Foundation"],
            "reasoning": "Burst main next to a school."
        }));
        let engine = RoutingEngine::new(AiClassifier::new(
            Arc::new(mock),
            "m",
            Arc::new(NgoRoster::builtin()),
        ));

        let request = request().with_image_url("https://example.org/burst-pipe.jpg");
        let classification = engine.handle(&request).await.unwrap();

        assert_eq!(classification.source(), ClassificationSource::Ai);
        assert_eq!(classification.response().severity, Severity::Critical);
        assert_eq!(classification.response().impact_score, 9.0);
    }

    #[tokio::test]
    async fn test_unavailable_ai_matches_keyword_classifier() {
        let roster = Arc::new(NgoRoster::builtin());
        let engine = RoutingEngine::new(AiClassifier::unavailable(roster.clone()));

        let classification = engine.handle(&request()).await.unwrap();

        assert_eq!(classification.source(), ClassificationSource::Keyword);
        let response = classification.into_response();
        assert_eq!(response.category, IssueCategory::Water);
        assert_eq!(response.severity, Severity::High);
        assert_eq!(response.impact_score, 7.5);
        assert_eq!(
            response,
            KeywordClassifier::new(roster).classify(&request().issue_text, "Kothrud")
        );
    }
}
