//! FAQ generation service using LLM
//!
//! Generates FAQ sets from support tickets and common queries, and revises
//! single FAQs from reader feedback.

use crate::model::extracted::{ExtractedFaq, ExtractedFaqSet};
use crate::model::{ContentRecord, FaqGenerationResult, GeneratedFaq, SearchQuery, SupportTicket};
use crate::service::error::AnalyzerError;
use crate::service::faqs::converters::convert_faq_set;
use crate::service::faqs::prompts::{
    FAQ_GENERATION_SYSTEM_PROMPT, FAQ_REVISION_SYSTEM_PROMPT, build_generation_prompt,
    build_query_prompt, build_revision_prompt, build_ticket_prompt,
};
use crate::service::faqs::validation::{validate_faq, validate_faq_set};
use crate::service::llm::SharedCompletionService;
use crate::service::structured::complete_structured;

pub mod converters;
pub mod prompts;
pub mod validation;

/// Contract name of the FAQ set response
pub const FAQ_SET_CONTRACT: &str = "faq_set";

/// Contract name of the single FAQ revision response
pub const FAQ_REVISION_CONTRACT: &str = "faq_revision";

/// Service generating FAQs from support data
#[derive(Clone)]
pub struct FaqGenerator {
    completion: SharedCompletionService,
}

impl FaqGenerator {
    pub fn new(completion: SharedCompletionService) -> Self {
        Self { completion }
    }

    /// Generate FAQs from every supplied source
    pub async fn generate(
        &self,
        tickets: &[SupportTicket],
        queries: &[SearchQuery],
        documentation: &[ContentRecord],
    ) -> Result<FaqGenerationResult, AnalyzerError> {
        let prompt = build_generation_prompt(tickets, queries, documentation);
        self.run(prompt, tickets.len(), queries.len()).await
    }

    /// Generate FAQs from support tickets, referencing existing docs by title
    pub async fn generate_from_tickets(
        &self,
        tickets: &[SupportTicket],
        existing_titles: &[String],
    ) -> Result<FaqGenerationResult, AnalyzerError> {
        let prompt = build_ticket_prompt(tickets, existing_titles);
        self.run(prompt, tickets.len(), 0).await
    }

    /// Generate FAQs from common search queries
    pub async fn generate_from_queries(
        &self,
        queries: &[SearchQuery],
        documentation: &[ContentRecord],
    ) -> Result<FaqGenerationResult, AnalyzerError> {
        let prompt = build_query_prompt(queries, documentation);
        self.run(prompt, 0, queries.len()).await
    }

    /// Revise one FAQ from feedback
    ///
    /// Stateless: the result depends only on the arguments and the
    /// completion service's reply.
    pub async fn improve_faq(
        &self,
        question: &str,
        current_answer: &str,
        feedback: &[String],
    ) -> Result<GeneratedFaq, AnalyzerError> {
        let prompt = build_revision_prompt(question, current_answer, feedback);
        let improved: ExtractedFaq = complete_structured(
            self.completion.as_ref(),
            FAQ_REVISION_CONTRACT,
            FAQ_REVISION_SYSTEM_PROMPT,
            prompt,
            validate_faq,
        )
        .await?;

        tracing::info!(
            feedback_items = feedback.len(),
            confidence = improved.confidence_score,
            "FAQ revision complete"
        );

        Ok(improved)
    }

    async fn run(
        &self,
        prompt: String,
        tickets_analyzed: usize,
        queries_analyzed: usize,
    ) -> Result<FaqGenerationResult, AnalyzerError> {
        let extracted: ExtractedFaqSet = complete_structured(
            self.completion.as_ref(),
            FAQ_SET_CONTRACT,
            FAQ_GENERATION_SYSTEM_PROMPT,
            prompt,
            validate_faq_set,
        )
        .await?;

        let result = convert_faq_set(extracted, tickets_analyzed, queries_analyzed);

        tracing::info!(
            faqs = result.faqs.len(),
            categories = result.categories_covered.len(),
            sources_analyzed = result.total_sources_analyzed,
            "FAQ generation complete"
        );

        Ok(result)
    }
}
