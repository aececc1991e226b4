//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::{analysis, content, error, faqs, gaps, health};
use crate::model;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Knowledge Gap Agent",
        description = "Knowledge gap detection, FAQ generation and content analysis"
    ),
    paths(
        analysis::run_analysis,
        analysis::analyze_quality,
        gaps::detect_gaps,
        gaps::analyze_gaps,
        gaps::detect_from_searches,
        gaps::detect_from_tickets,
        faqs::generate_faqs,
        faqs::generate_from_tickets,
        faqs::generate_from_queries,
        faqs::improve_faq,
        content::analyze_quality,
        content::analyze_coverage,
        content::suggest_content,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        model::AnalysisRequest,
        model::AnalysisReport,
        model::SearchQuery,
        model::SupportTicket,
        model::UserFeedback,
        model::ContentRecord,
        model::GapPriority,
        model::DetectedGap,
        model::GapDetectionResult,
        model::GeneratedFaq,
        model::FaqGenerationResult,
        model::ContentQuality,
        model::CoverageAnalysis,
        model::ContentSuggestion,
        model::ContentAnalysisResult,
        analysis::QualityAnalysisRequest,
        gaps::DetectGapsRequest,
        gaps::AnalyzeGapsRequest,
        gaps::SearchGapsRequest,
        gaps::TicketGapsRequest,
        faqs::GenerateFaqsRequest,
        faqs::TicketFaqsRequest,
        faqs::QueryFaqsRequest,
        faqs::ImproveFaqRequest,
        content::CoverageRequest,
        content::SuggestionRequest,
        error::ErrorResponse,
        health::HealthStatus,
        health::ReadinessStatus,
        health::CompletionServiceStatus,
    )),
    tags(
        (name = "analysis", description = "Orchestrated analysis runs"),
        (name = "gaps", description = "Knowledge gap detection"),
        (name = "faqs", description = "FAQ generation and revision"),
        (name = "content", description = "Content quality, coverage and suggestions"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
