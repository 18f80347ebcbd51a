//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use analysis::{
    AnalysisPipeline, AnthropicClient, HttpFetcher, PipelineConfig, RetryingCompletion,
};

use crate::config::Config;
use crate::routes::{analyze_handler, health_handler};
use crate::static_files::{serve_index, serve_static};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
    pub anthropic_configured: bool,
}

/// Build the Axum application router
pub fn build_app(config: &Config) -> Router {
    let mut client = AnthropicClient::new(config.anthropic_api_key.clone());
    if let Some(model) = &config.anthropic_model {
        client = client.with_model(model);
    }
    let anthropic_configured = client.is_configured();

    let completion = RetryingCompletion::new(client).with_max_retries(config.max_retries);
    let fetcher = HttpFetcher::new().with_max_content_chars(config.max_content_chars);

    let pipeline = Arc::new(AnalysisPipeline::new(
        Arc::new(fetcher),
        Arc::new(completion),
        PipelineConfig {
            min_content_chars: config.min_content_chars,
            ..PipelineConfig::default()
        },
    ));

    let state = AppState {
        pipeline,
        anthropic_configured,
    };

    // CORS: the UI may be served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(serve_index))
        .route("/static/*path", get(serve_static))
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
