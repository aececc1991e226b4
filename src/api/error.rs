//! Unified API error handling
//!
//! Every endpoint returns `Result<T, ApiError>` so failures share one
//! response format.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::{AnalyzerError, OrchestratorError};

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Completion provider failed or timed out (502)
    #[error("Completion service error: {0}")]
    CompletionService(String),

    /// Model reply was malformed, off-contract or out of range (502)
    #[error("Invalid model output: {0}")]
    ModelOutput(String),
}

impl ApiError {
    fn error_type(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::CompletionService(_) => "completion_service_error",
            ApiError::ModelOutput(_) => "model_output_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::CompletionService(_) | ApiError::ModelOutput(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = self.error_type();

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<AnalyzerError> for ApiError {
    fn from(err: AnalyzerError) -> Self {
        match err {
            AnalyzerError::Upstream(e) => ApiError::CompletionService(e.to_string()),
            AnalyzerError::StructuredOutput(e) => ApiError::ModelOutput(e.to_string()),
        }
    }
}

impl From<OrchestratorError> for ApiError {
    fn from(err: OrchestratorError) -> Self {
        match err {
            OrchestratorError::StageFailed { stage, source } => match ApiError::from(source) {
                ApiError::CompletionService(msg) => {
                    ApiError::CompletionService(format!("{stage}: {msg}"))
                }
                ApiError::ModelOutput(msg) => ApiError::ModelOutput(format!("{stage}: {msg}")),
                other => other,
            },
        }
    }
}
