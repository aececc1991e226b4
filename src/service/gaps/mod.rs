//! Knowledge gap detection service using LLM
//!
//! Combines search, ticket and feedback evidence into one prompt and turns
//! the structured response into a [`GapDetectionResult`].

use crate::model::extracted::ExtractedGapAnalysis;
use crate::model::{GapDetectionResult, SearchQuery, SupportTicket, UserFeedback};
use crate::service::error::AnalyzerError;
use crate::service::gaps::converters::convert_gap_analysis;
use crate::service::gaps::prompts::{
    GAP_DETECTION_SYSTEM_PROMPT, build_detection_prompt, build_search_prompt, build_ticket_prompt,
};
use crate::service::gaps::validation::validate_gap_analysis;
use crate::service::llm::SharedCompletionService;
use crate::service::structured::complete_structured;

pub mod converters;
pub mod prompts;
pub mod validation;

/// Contract name of the gap analysis response
pub const GAP_ANALYSIS_CONTRACT: &str = "gap_analysis";

/// Service detecting knowledge gaps from user demand signals
#[derive(Clone)]
pub struct GapDetector {
    completion: SharedCompletionService,
}

impl GapDetector {
    pub fn new(completion: SharedCompletionService) -> Self {
        Self { completion }
    }

    /// Detect gaps from every supplied source
    ///
    /// Missing sources are represented by placeholders in the prompt. The
    /// returned input counts are the caller's, whatever the model states.
    pub async fn detect(
        &self,
        search_queries: &[SearchQuery],
        support_tickets: &[SupportTicket],
        user_feedback: &[UserFeedback],
        existing_titles: &[String],
    ) -> Result<GapDetectionResult, AnalyzerError> {
        let prompt = build_detection_prompt(
            search_queries,
            support_tickets,
            user_feedback,
            existing_titles,
        );
        self.run(prompt, search_queries.len(), support_tickets.len())
            .await
    }

    /// Detect gaps from zero-result searches only
    pub async fn detect_from_searches(
        &self,
        zero_result_queries: &[SearchQuery],
        existing_titles: &[String],
    ) -> Result<GapDetectionResult, AnalyzerError> {
        let prompt = build_search_prompt(zero_result_queries, existing_titles);
        self.run(prompt, zero_result_queries.len(), 0).await
    }

    /// Detect gaps from support tickets only
    pub async fn detect_from_tickets(
        &self,
        support_tickets: &[SupportTicket],
        existing_titles: &[String],
    ) -> Result<GapDetectionResult, AnalyzerError> {
        let prompt = build_ticket_prompt(support_tickets, existing_titles);
        self.run(prompt, 0, support_tickets.len()).await
    }

    async fn run(
        &self,
        prompt: String,
        queries_analyzed: usize,
        tickets_analyzed: usize,
    ) -> Result<GapDetectionResult, AnalyzerError> {
        let extracted: ExtractedGapAnalysis = complete_structured(
            self.completion.as_ref(),
            GAP_ANALYSIS_CONTRACT,
            GAP_DETECTION_SYSTEM_PROMPT,
            prompt,
            validate_gap_analysis,
        )
        .await?;

        let result = convert_gap_analysis(extracted, queries_analyzed, tickets_analyzed);

        tracing::info!(
            gaps = result.gaps.len(),
            critical = result.critical_count(),
            queries_analyzed,
            tickets_analyzed,
            "Gap detection complete"
        );

        Ok(result)
    }
}
