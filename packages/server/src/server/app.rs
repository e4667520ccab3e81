//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, Environment};
use crate::domains::issues::{AiClassifier, RoutingEngine};
use crate::domains::ngos::NgoRoster;
use crate::server::error::panic_response;
use crate::server::routes::{analyze_issue_handler, health_handler, root_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RoutingEngine>,
    pub environment: Environment,
    pub gemini_configured: bool,
}

impl AppState {
    pub fn new(engine: RoutingEngine, environment: Environment, gemini_configured: bool) -> Self {
        Self {
            engine: Arc::new(engine),
            environment,
            gemini_configured,
        }
    }

    /// Wire the classifier pair from configuration and a loaded roster.
    ///
    /// `gemini_configured` reports whether the AI backend was actually built,
    /// not merely whether a key was supplied.
    pub fn from_config(config: &Config, roster: Arc<NgoRoster>) -> Self {
        let classifier = AiClassifier::from_config(config, roster);
        let gemini_configured = classifier.is_available();
        Self::new(
            RoutingEngine::new(classifier),
            config.environment,
            gemini_configured,
        )
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - allow any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let environment = state.environment;

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/analyze-issue", post(analyze_issue_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(CatchPanicLayer::custom(move |panic| panic_response(panic, environment)))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
