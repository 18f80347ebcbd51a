use axum::{extract::Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::AppState;
use crate::static_files::assets_present;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    timestamp: DateTime<Utc>,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    anthropic_configured: bool,
    static_assets: bool,
}

/// Health check endpoint
///
/// Reports whether the completion credential is configured and whether the
/// embedded UI is present. Always answers 200; a missing key degrades the
/// analyze endpoint, not the process.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "TrueEye v2.0".to_string(),
        timestamp: Utc::now(),
        checks: HealthChecks {
            anthropic_configured: state.anthropic_configured,
            static_assets: assets_present(),
        },
    })
}
