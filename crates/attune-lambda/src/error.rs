use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use attune_bedrock::error::BedrockError;

/// Unified API error type for the analyze pipeline.
///
/// Only these three classes fail a request. Notification failures are
/// logged and swallowed by the route, and parsing degradation is handled
/// inside the extractor; neither ever becomes an `ApiError`.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed submission fields. Rejected before any
    /// downstream work.
    Validation(String),
    /// The service is missing settings it needs to generate a report.
    Config(String),
    /// The generation call failed; the whole request fails with the
    /// upstream detail attached.
    Generation(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation error", Some(msg)),
            ApiError::Config(msg) => {
                tracing::error!("configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server configuration error",
                    Some(msg),
                )
            }
            ApiError::Generation(msg) => {
                tracing::error!("generation failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "analysis generation failed",
                    Some(msg),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BedrockError> for ApiError {
    fn from(e: BedrockError) -> Self {
        ApiError::Generation(e.to_string())
    }
}
