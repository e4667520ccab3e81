use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub gemini_configured: bool,
}

/// Service banner
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        status: "online".to_string(),
        message: "Civic issue routing API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint
///
/// Always 200: a missing LLM credential degrades classification to keywords
/// but does not make the service unhealthy.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        environment: state.environment.as_str().to_string(),
        gemini_configured: state.gemini_configured,
    })
}
