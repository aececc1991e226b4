//! REST API endpoints for knowledge gap detection

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::ApiError;
use crate::app::AppState;
use crate::model::{GapDetectionResult, SearchQuery, SupportTicket, UserFeedback};

/// Request body for detection over every source
#[derive(Debug, Deserialize, ToSchema)]
pub struct DetectGapsRequest {
    #[serde(default)]
    pub search_queries: Vec<SearchQuery>,
    #[serde(default)]
    pub support_tickets: Vec<SupportTicket>,
    #[serde(default)]
    pub user_feedback: Vec<UserFeedback>,
    /// Titles of content that already exists
    #[serde(default)]
    pub existing_titles: Vec<String>,
}

/// Request body for a quick analysis over searches and tickets
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeGapsRequest {
    #[serde(default)]
    pub search_queries: Vec<SearchQuery>,
    #[serde(default)]
    pub support_tickets: Vec<SupportTicket>,
    #[serde(default)]
    pub existing_titles: Vec<String>,
}

/// Request body for detection over zero-result searches
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchGapsRequest {
    #[serde(default)]
    pub search_queries: Vec<SearchQuery>,
    #[serde(default)]
    pub existing_titles: Vec<String>,
}

/// Request body for detection over support tickets
#[derive(Debug, Deserialize, ToSchema)]
pub struct TicketGapsRequest {
    #[serde(default)]
    pub support_tickets: Vec<SupportTicket>,
    #[serde(default)]
    pub existing_titles: Vec<String>,
}

/// Detect knowledge gaps from searches, tickets and feedback
#[utoipa::path(
    post,
    path = "/v1/gaps/detect",
    request_body = DetectGapsRequest,
    responses(
        (status = 200, description = "Gaps detected", body = GapDetectionResult),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "gaps"
)]
#[post("/v1/gaps/detect")]
pub async fn detect_gaps(
    state: web::Data<AppState>,
    request: web::Json<DetectGapsRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .gap_detector()
        .detect(
            &request.search_queries,
            &request.support_tickets,
            &request.user_feedback,
            &request.existing_titles,
        )
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Run gap detection alone over searches and tickets
#[utoipa::path(
    post,
    path = "/v1/gaps/analyze",
    request_body = AnalyzeGapsRequest,
    responses(
        (status = 200, description = "Gaps detected", body = GapDetectionResult),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "gaps"
)]
#[post("/v1/gaps/analyze")]
pub async fn analyze_gaps(
    state: web::Data<AppState>,
    request: web::Json<AnalyzeGapsRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .orchestrator
        .detect_gaps_only(
            &request.search_queries,
            &request.support_tickets,
            &request.existing_titles,
        )
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Detect knowledge gaps from zero-result searches only
#[utoipa::path(
    post,
    path = "/v1/gaps/detect/searches",
    request_body = SearchGapsRequest,
    responses(
        (status = 200, description = "Gaps detected", body = GapDetectionResult),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "gaps"
)]
#[post("/v1/gaps/detect/searches")]
pub async fn detect_from_searches(
    state: web::Data<AppState>,
    request: web::Json<SearchGapsRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .gap_detector()
        .detect_from_searches(&request.search_queries, &request.existing_titles)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Detect knowledge gaps from support tickets only
#[utoipa::path(
    post,
    path = "/v1/gaps/detect/tickets",
    request_body = TicketGapsRequest,
    responses(
        (status = 200, description = "Gaps detected", body = GapDetectionResult),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "gaps"
)]
#[post("/v1/gaps/detect/tickets")]
pub async fn detect_from_tickets(
    state: web::Data<AppState>,
    request: web::Json<TicketGapsRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .gap_detector()
        .detect_from_tickets(&request.support_tickets, &request.existing_titles)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Configure gap detection routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(detect_gaps)
        .service(analyze_gaps)
        .service(detect_from_searches)
        .service(detect_from_tickets);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::gaps::GAP_ANALYSIS_CONTRACT;
    use crate::service::testing::StubCompletionService;
    use actix_web::{App, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_ticket_detection_counts_tickets() {
        let stub = StubCompletionService::new()
            .reply(
                GAP_ANALYSIS_CONTRACT,
                json!({
                    "gaps": [{
                        "title": "SSO setup",
                        "description": "No SSO guide",
                        "topic": "authentication",
                        "priority": "critical",
                        "impact_score": 0.9
                    }],
                    "analysis_summary": "One gap"
                }),
            )
            .shared();
        let state = AppState::with_completion_service(stub.clone(), "stub-model".to_string());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/gaps/detect/tickets")
            .set_json(json!({
                "support_tickets": [
                    { "subject": "SSO", "description": "How to set up SAML?", "category": "auth" },
                    { "subject": "SSO again" }
                ]
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_tickets_analyzed"], 2);
        assert_eq!(body["total_queries_analyzed"], 0);
        assert_eq!(body["gaps"][0]["priority"], "critical");
        assert!(stub.requests()[0].prompt.contains("Category: auth"));
    }

    #[actix_web::test]
    async fn test_analyze_runs_detection_without_feedback() {
        let stub = StubCompletionService::new()
            .reply(
                GAP_ANALYSIS_CONTRACT,
                json!({ "gaps": [], "analysis_summary": "Nothing missing", "coverage_score": 0.8 }),
            )
            .shared();
        let state = AppState::with_completion_service(stub.clone(), "stub-model".to_string());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/gaps/analyze")
            .set_json(json!({
                "search_queries": ["sso setup", { "query": "saml", "count": 4 }],
                "support_tickets": [{ "subject": "SSO" }],
                "existing_titles": ["Getting started"]
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_queries_analyzed"], 2);
        assert_eq!(body["total_tickets_analyzed"], 1);
        assert_eq!(body["coverage_score"], 0.8);
        let prompt = &stub.requests()[0].prompt;
        assert!(prompt.contains("## User Feedback\nNo feedback data available\n"));
        assert!(prompt.contains("- \"saml\" (count: 4)"));
        assert!(prompt.contains("Getting started"));
    }
}
