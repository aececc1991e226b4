//! REST API endpoints for orchestrated analysis runs

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::ApiError;
use crate::app::AppState;
use crate::model::{AnalysisReport, AnalysisRequest, ContentAnalysisResult, ContentRecord};

/// Request body for bulk content quality analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct QualityAnalysisRequest {
    /// Content to assess; only the first 20 items are scored
    #[serde(default)]
    pub content: Vec<ContentRecord>,
}

/// Run the complete gap, coverage, FAQ and suggestion analysis
#[utoipa::path(
    post,
    path = "/v1/analysis/run",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisReport),
        (status = 400, description = "Invalid request body", body = crate::api::error::ErrorResponse),
        (status = 502, description = "A stage failed upstream", body = crate::api::error::ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/v1/analysis/run")]
pub async fn run_analysis(
    state: web::Data<AppState>,
    request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    let report = state.orchestrator.run_full_analysis(&request).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Assess the quality of a batch of content
#[utoipa::path(
    post,
    path = "/v1/analysis/quality",
    request_body = QualityAnalysisRequest,
    responses(
        (status = 200, description = "Quality assessed", body = ContentAnalysisResult),
        (status = 400, description = "Invalid request body", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/v1/analysis/quality")]
pub async fn analyze_quality(
    state: web::Data<AppState>,
    request: web::Json<QualityAnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .orchestrator
        .analyze_content_quality(&request.content)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(run_analysis).service(analyze_quality);
}
