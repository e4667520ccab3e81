//! In-process test harness: the full axum app with an injected AI backend.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use civic_core::config::Environment;
use civic_core::domains::issues::{AiClassifier, RoutingEngine};
use civic_core::domains::ngos::NgoRoster;
use civic_core::kernel::BaseAI;
use civic_core::server::{build_app, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// A decoded HTTP response.
pub struct TestResponse {
    pub status: StatusCode,
    pub source: Option<String>,
    pub body: Value,
}

pub struct TestHarness {
    app: Router,
}

impl TestHarness {
    /// App whose classifier talks to the given backend.
    pub fn with_ai(ai: Arc<dyn BaseAI>) -> Self {
        Self::with_ai_in(ai, Environment::Development)
    }

    pub fn with_ai_in(ai: Arc<dyn BaseAI>, environment: Environment) -> Self {
        init_tracing();
        let roster = Arc::new(NgoRoster::builtin());
        let classifier = AiClassifier::new(ai, "test-model", roster);
        Self::from_state(AppState::new(
            RoutingEngine::new(classifier),
            environment,
            true,
        ))
    }

    /// App with no AI backend configured.
    pub fn without_ai(environment: Environment) -> Self {
        init_tracing();
        let roster = Arc::new(NgoRoster::builtin());
        Self::from_state(AppState::new(
            RoutingEngine::new(AiClassifier::unavailable(roster)),
            environment,
            false,
        ))
    }

    pub fn from_state(state: AppState) -> Self {
        Self {
            app: build_app(state),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<String>) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let source = response
            .headers()
            .get("x-classification-source")
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            source,
            body,
        }
    }
}

fn init_tracing() {
    // Run tests with: RUST_LOG=debug cargo test -- --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
