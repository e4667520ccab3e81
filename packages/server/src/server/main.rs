// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use civic_core::domains::ngos::NgoRoster;
use civic_core::server::{build_app, AppState};
use civic_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,civic_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Civic Issue Routing API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        environment = config.environment.as_str(),
        gemini_configured = config.gemini_configured(),
        "Configuration loaded"
    );

    // Load NGO roster
    let roster = match &config.ngo_roster_path {
        Some(path) => NgoRoster::from_json_file(path)
            .with_context(|| format!("Failed to load NGO roster from {}", path.display()))?,
        None => NgoRoster::builtin(),
    };
    tracing::info!(entries = roster.len(), "NGO roster loaded");

    // Build application
    let state = AppState::from_config(&config, Arc::new(roster));
    let app = build_app(state);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
