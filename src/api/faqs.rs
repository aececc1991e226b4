//! REST API endpoints for FAQ generation and revision

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::{ApiError, require_text};
use crate::app::AppState;
use crate::model::{ContentRecord, FaqGenerationResult, GeneratedFaq, SearchQuery, SupportTicket};

/// Request body for FAQ generation from tickets and searches
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateFaqsRequest {
    #[serde(default)]
    pub support_tickets: Vec<SupportTicket>,
    #[serde(default)]
    pub search_queries: Vec<SearchQuery>,
}

/// Request body for FAQ generation from resolved tickets
#[derive(Debug, Deserialize, ToSchema)]
pub struct TicketFaqsRequest {
    #[serde(default)]
    pub support_tickets: Vec<SupportTicket>,
    #[serde(default)]
    pub existing_titles: Vec<String>,
}

/// Request body for FAQ generation from common searches
#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryFaqsRequest {
    #[serde(default)]
    pub search_queries: Vec<SearchQuery>,
    #[serde(default)]
    pub documentation: Vec<ContentRecord>,
}

/// Request body for revising one FAQ
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImproveFaqRequest {
    pub question: String,
    pub current_answer: String,
    #[serde(default)]
    pub feedback: Vec<String>,
}

/// Generate FAQs from tickets and searches
#[utoipa::path(
    post,
    path = "/v1/faqs/generate",
    request_body = GenerateFaqsRequest,
    responses(
        (status = 200, description = "FAQs generated", body = FaqGenerationResult),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "faqs"
)]
#[post("/v1/faqs/generate")]
pub async fn generate_faqs(
    state: web::Data<AppState>,
    request: web::Json<GenerateFaqsRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .orchestrator
        .generate_faqs_only(&request.support_tickets, &request.search_queries)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Generate FAQs from support tickets
#[utoipa::path(
    post,
    path = "/v1/faqs/generate/tickets",
    request_body = TicketFaqsRequest,
    responses(
        (status = 200, description = "FAQs generated", body = FaqGenerationResult),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "faqs"
)]
#[post("/v1/faqs/generate/tickets")]
pub async fn generate_from_tickets(
    state: web::Data<AppState>,
    request: web::Json<TicketFaqsRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .faq_generator()
        .generate_from_tickets(&request.support_tickets, &request.existing_titles)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Generate FAQs from common search queries
#[utoipa::path(
    post,
    path = "/v1/faqs/generate/queries",
    request_body = QueryFaqsRequest,
    responses(
        (status = 200, description = "FAQs generated", body = FaqGenerationResult),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "faqs"
)]
#[post("/v1/faqs/generate/queries")]
pub async fn generate_from_queries(
    state: web::Data<AppState>,
    request: web::Json<QueryFaqsRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .faq_generator()
        .generate_from_queries(&request.search_queries, &request.documentation)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Revise an FAQ answer from user feedback
#[utoipa::path(
    post,
    path = "/v1/faqs/improve",
    request_body = ImproveFaqRequest,
    responses(
        (status = 200, description = "FAQ revised", body = GeneratedFaq),
        (status = 400, description = "Question or answer missing", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Completion service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "faqs"
)]
#[post("/v1/faqs/improve")]
pub async fn improve_faq(
    state: web::Data<AppState>,
    request: web::Json<ImproveFaqRequest>,
) -> Result<HttpResponse, ApiError> {
    require_text("question", &request.question)?;
    require_text("current_answer", &request.current_answer)?;

    let faq = state
        .faq_generator()
        .improve_faq(&request.question, &request.current_answer, &request.feedback)
        .await?;
    Ok(HttpResponse::Ok().json(faq))
}

/// Configure FAQ routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_faqs)
        .service(generate_from_tickets)
        .service(generate_from_queries)
        .service(improve_faq);
}
