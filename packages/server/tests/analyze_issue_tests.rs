//! HTTP-level tests for the issue analysis API.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use civic_core::config::Environment;
use civic_core::kernel::{BaseAI, FailingAI, MockAI};
use serde_json::json;

use crate::common::TestHarness;

/// Backend that panics mid-request, standing in for an unexpected bug.
struct PanickingAI;

#[async_trait]
impl BaseAI for PanickingAI {
    async fn complete_with_model(&self, _prompt: &str, _model: &str) -> anyhow::Result<String> {
        panic!("backend exploded");
    }
}

fn water_issue() -> serde_json::Value {
    json!({
        "issue_text": "Water pipe burst near school, urgent help needed",
        "location": "Kothrud",
        "pincode": "411038"
    })
}

#[tokio::test]
async fn root_reports_online() {
    let harness = TestHarness::without_ai(Environment::Development);

    let response = harness.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "online");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn health_reports_configuration() {
    let harness = TestHarness::without_ai(Environment::Production);

    let response = harness.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"status": "healthy", "environment": "production", "gemini_configured": false})
    );
}

#[tokio::test]
async fn water_issue_without_ai_uses_keywords() {
    let harness = TestHarness::without_ai(Environment::Development);

    let response = harness.post_json("/analyze-issue", &water_issue()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.source.as_deref(), Some("keyword"));
    assert_eq!(response.body["category"], "Water");
    assert_eq!(response.body["severity"], "High");
    assert_eq!(response.body["impact_score"], 7.5);
    assert_eq!(response.body["suggested_ngos"], json!(["CleanWater Foundation"]));
    assert!(!response.body["reasoning"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn ai_answer_is_returned_verbatim() {
    let mock = MockAI::new().with_json_response(&json!({
        "category": "Water",
        "severity": "Critical",
        "impact_score": 8.5,
        "suggested_ngos": ["CleanWater Foundation", "Urban Relief NGO", "CommunityAid Trust"],
        "reasoning": "A burst main beside a school is a public health risk."
    }));
    let harness = TestHarness::with_ai(Arc::new(mock.clone()));

    let response = harness.post_json("/analyze-issue", &water_issue()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.source.as_deref(), Some("ai"));
    assert_eq!(response.body["severity"], "Critical");
    assert_eq!(response.body["impact_score"], 8.5);
    assert_eq!(
        response.body["suggested_ngos"],
        json!(["CleanWater Foundation", "Urban Relief NGO", "CommunityAid Trust"])
    );
    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.last_model().as_deref(), Some("test-model"));
    assert!(mock.was_called_with("- Location: Kothrud"));
}

#[tokio::test]
async fn failing_ai_falls_back_with_success_status() {
    let harness = TestHarness::with_ai(Arc::new(FailingAI::new("connection refused")));

    let response = harness.post_json("/analyze-issue", &water_issue()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.source.as_deref(), Some("keyword"));
    assert_eq!(response.body["category"], "Water");
    assert_eq!(response.body["severity"], "High");
}

#[tokio::test]
async fn malformed_ai_answer_falls_back() {
    let mock = MockAI::new().with_response("```json\n{\"category\": \"Water\"}\n```");
    let harness = TestHarness::with_ai(Arc::new(mock));

    let response = harness.post_json("/analyze-issue", &water_issue()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.source.as_deref(), Some("keyword"));
    assert_eq!(response.body["impact_score"], 7.5);
}

#[tokio::test]
async fn short_issue_text_is_rejected_before_classification() {
    let mock = MockAI::new();
    let harness = TestHarness::with_ai(Arc::new(mock.clone()));

    let response = harness
        .post_json(
            "/analyze-issue",
            &json!({"issue_text": "pothole", "location": "Baner"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "Invalid request");
    assert_eq!(response.body["fallback_used"], false);
    assert!(response.body["detail"]
        .as_str()
        .unwrap()
        .contains("issue_text"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn bad_pincode_is_rejected() {
    let harness = TestHarness::without_ai(Environment::Development);

    let mut body = water_issue();
    body["pincode"] = json!("41103A");
    let response = harness.post_json("/analyze-issue", &body).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["detail"], "pincode must be exactly 6 digits");
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let harness = TestHarness::without_ai(Environment::Development);

    let response = harness
        .post_json("/analyze-issue", &json!({"issue_text": "Streetlight broken for weeks"}))
        .await;

    assert!(response.status.is_client_error());
    assert_eq!(response.body["error"], "Invalid request body");
    assert_eq!(response.body["fallback_used"], false);
}

#[tokio::test]
async fn invalid_json_is_rejected() {
    let harness = TestHarness::without_ai(Environment::Development);

    let response = harness.post_raw("/analyze-issue", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid request body");
}

#[tokio::test]
async fn image_url_is_accepted_and_ignored() {
    let harness = TestHarness::without_ai(Environment::Development);

    let mut body = water_issue();
    body["image_url"] = json!("https://example.org/pipe.jpg");
    let response = harness.post_json("/analyze-issue", &body).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["category"], "Water");
}

#[tokio::test]
async fn panic_returns_internal_error_envelope_in_production() {
    let harness = TestHarness::with_ai_in(Arc::new(PanickingAI), Environment::Production);

    let response = harness.post_json("/analyze-issue", &water_issue()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.source, None);
    assert_eq!(
        response.body,
        json!({"error": "Internal server error", "detail": null, "fallback_used": false})
    );
}

#[tokio::test]
async fn panic_detail_is_shown_in_development() {
    let harness = TestHarness::with_ai_in(Arc::new(PanickingAI), Environment::Development);

    let response = harness.post_json("/analyze-issue", &water_issue()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Internal server error");
    assert_eq!(response.body["detail"], "backend exploded");
}
