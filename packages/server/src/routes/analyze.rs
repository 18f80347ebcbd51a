use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use analysis::{AnalysisError, AnalysisOutcome, FetchError};

use crate::app::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Uniform envelope returned once the pipeline was able to start.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
    pub success: bool,
    pub error: Option<String>,
}

/// Request-level failures: the pipeline never got to do meaningful work.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Timeout(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Timeout(message) => (StatusCode::REQUEST_TIMEOUT, message),
            ApiError::ServiceUnavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Analyze a URL through the three-stage pipeline.
///
/// Validation and fetch failures surface as request errors; once fetching
/// succeeded, every outcome is a well-formed `AnalyzeResponse` envelope.
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    match state.pipeline.analyze(&request.url).await {
        Ok(AnalysisOutcome::Report(report)) => Ok(Json(AnalyzeResponse {
            result: report.render(),
            success: true,
            error: None,
        })),
        Ok(AnalysisOutcome::ContentTooShort) => Ok(Json(AnalyzeResponse {
            result: "The page content is too short to analyze".to_string(),
            success: false,
            error: Some("content_too_short".to_string()),
        })),
        Err(e) => map_error(e),
    }
}

fn map_error(e: AnalysisError) -> Result<Json<AnalyzeResponse>, ApiError> {
    match e {
        AnalysisError::InvalidUrl { url } => {
            Err(ApiError::BadRequest(format!("Invalid URL format: {}", url)))
        }
        AnalysisError::Fetch(FetchError::Timeout { url }) => {
            Err(ApiError::Timeout(format!("Timeout accessing URL: {}", url)))
        }
        AnalysisError::Fetch(FetchError::Http { status, url }) => Err(ApiError::BadRequest(
            format!("Error accessing URL {}: status code {}", url, status),
        )),
        AnalysisError::Fetch(other) => {
            Err(ApiError::BadRequest(format!("Connection error: {}", other)))
        }
        AnalysisError::ServiceUnavailable => Err(ApiError::ServiceUnavailable(
            "Analysis service not available. Check ANTHROPIC_API_KEY.".to_string(),
        )),
        stage_error @ AnalysisError::Stage { .. } => {
            // Stage failures stay inside the envelope so the caller always
            // gets a well-formed body once fetching succeeded
            error!(error = %stage_error, "Analysis pipeline failed");
            Ok(Json(AnalyzeResponse {
                result: format!("Unexpected error: {}", stage_error),
                success: false,
                error: Some("unexpected_error".to_string()),
            }))
        }
    }
}
