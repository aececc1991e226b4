//! REST API endpoints for content quality, coverage and suggestions

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::{ApiError, require_text};
use crate::app::AppState;
use crate::model::{ContentQuality, ContentRecord, ContentSuggestion, CoverageAnalysis};

/// Request body for coverage analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct CoverageRequest {
    #[serde(default)]
    pub content: Vec<ContentRecord>,
    #[serde(default)]
    pub expected_topics: Vec<String>,
}

/// Request body for a content suggestion
#[derive(Debug, Deserialize, ToSchema)]
pub struct SuggestionRequest {
    pub gap_title: String,
    #[serde(default)]
    pub gap_description: String,
    #[serde(default)]
    pub existing_titles: Vec<String>,
}

/// Assess the quality of one content item
#[utoipa::path(
    post,
    path = "/v1/content/quality",
    request_body = ContentRecord,
    responses(
        (status = 200, description = "Quality assessed", body = ContentQuality),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "content"
)]
#[post("/v1/content/quality")]
pub async fn analyze_quality(
    state: web::Data<AppState>,
    content: web::Json<ContentRecord>,
) -> Result<HttpResponse, ApiError> {
    let quality = state.content_analyzer().analyze_quality(&content).await?;
    Ok(HttpResponse::Ok().json(quality))
}

/// Compare existing content against expected topics
#[utoipa::path(
    post,
    path = "/v1/content/coverage",
    request_body = CoverageRequest,
    responses(
        (status = 200, description = "Coverage analyzed", body = CoverageAnalysis),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "content"
)]
#[post("/v1/content/coverage")]
pub async fn analyze_coverage(
    state: web::Data<AppState>,
    request: web::Json<CoverageRequest>,
) -> Result<HttpResponse, ApiError> {
    let coverage = state
        .content_analyzer()
        .analyze_coverage(&request.content, &request.expected_topics)
        .await?;
    Ok(HttpResponse::Ok().json(coverage))
}

/// Propose new content for a knowledge gap
#[utoipa::path(
    post,
    path = "/v1/content/suggestions",
    request_body = SuggestionRequest,
    responses(
        (status = 200, description = "Suggestion generated", body = ContentSuggestion),
        (status = 400, description = "Gap title missing", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "content"
)]
#[post("/v1/content/suggestions")]
pub async fn suggest_content(
    state: web::Data<AppState>,
    request: web::Json<SuggestionRequest>,
) -> Result<HttpResponse, ApiError> {
    require_text("gap_title", &request.gap_title)?;

    let suggestion = state
        .content_analyzer()
        .suggest_content(
            &request.gap_title,
            &request.gap_description,
            &request.existing_titles,
        )
        .await?;
    Ok(HttpResponse::Ok().json(suggestion))
}

/// Configure content analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_quality)
        .service(analyze_coverage)
        .service(suggest_content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::content::COVERAGE_CONTRACT;
    use crate::service::testing::StubCompletionService;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_coverage_inconsistent_counts_is_bad_gateway() {
        let stub = StubCompletionService::new().reply(
            COVERAGE_CONTRACT,
            json!({ "total_topics": 1, "covered_topics": 2, "coverage_percentage": 200.0 }),
        );
        let state = AppState::with_completion_service(stub.shared(), "stub-model".to_string());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/content/coverage")
            .set_json(json!({ "content": [], "expected_topics": ["billing"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "model_output_error");
    }

    #[actix_web::test]
    async fn test_suggestion_requires_gap_title() {
        let state = AppState::with_completion_service(
            StubCompletionService::new().shared(),
            "stub-model".to_string(),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/content/suggestions")
            .set_json(json!({ "gap_title": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
