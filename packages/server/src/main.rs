// Main entry point for the TrueEye analysis server

mod app;
mod config;
mod routes;
mod static_files;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::build_app;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,analysis=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TrueEye media literacy service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    if config.anthropic_api_key.is_some() {
        tracing::info!("ANTHROPIC_API_KEY configured");
    } else {
        tracing::warn!(
            "ANTHROPIC_API_KEY not set - the service will start but analysis requests will fail"
        );
    }
    tracing::info!(
        static_assets = static_files::assets_present(),
        "Embedded UI checked"
    );

    // Build application
    let app = build_app(&config);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
