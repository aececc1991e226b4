//! Content analysis service using LLM
//!
//! Three independent operations share one completion service handle:
//! single-item quality scoring, coverage against expected topics, and
//! content suggestions for a gap.

use crate::model::extracted::{ExtractedCoverage, ExtractedQualityAssessment, ExtractedSuggestion};
use crate::model::{ContentQuality, ContentRecord, ContentSuggestion, CoverageAnalysis};
use crate::service::content::converters::{convert_coverage, convert_quality};
use crate::service::content::prompts::{
    COVERAGE_SYSTEM_PROMPT, QUALITY_SYSTEM_PROMPT, SUGGESTION_SYSTEM_PROMPT,
    build_coverage_prompt, build_quality_prompt, build_suggestion_prompt,
};
use crate::service::content::validation::{
    validate_coverage, validate_quality, validate_suggestion,
};
use crate::service::error::AnalyzerError;
use crate::service::llm::SharedCompletionService;
use crate::service::structured::complete_structured;

pub mod converters;
pub mod prompts;
pub mod validation;

/// Contract name of the quality assessment response
pub const QUALITY_CONTRACT: &str = "content_quality";

/// Contract name of the coverage analysis response
pub const COVERAGE_CONTRACT: &str = "coverage_analysis";

/// Contract name of the content suggestion response
pub const SUGGESTION_CONTRACT: &str = "content_suggestion";

/// Service analyzing existing content
#[derive(Clone)]
pub struct ContentAnalyzer {
    completion: SharedCompletionService,
}

impl ContentAnalyzer {
    pub fn new(completion: SharedCompletionService) -> Self {
        Self { completion }
    }

    /// Score the quality of one content record
    pub async fn analyze_quality(
        &self,
        content: &ContentRecord,
    ) -> Result<ContentQuality, AnalyzerError> {
        let extracted: ExtractedQualityAssessment = complete_structured(
            self.completion.as_ref(),
            QUALITY_CONTRACT,
            QUALITY_SYSTEM_PROMPT,
            build_quality_prompt(content),
            validate_quality,
        )
        .await?;

        let quality = convert_quality(extracted, content);

        tracing::debug!(
            content_id = %quality.content_id,
            overall_score = quality.overall_score,
            issues = quality.issues.len(),
            "Content quality assessed"
        );

        Ok(quality)
    }

    /// Compare existing content against the expected topics
    pub async fn analyze_coverage(
        &self,
        content_list: &[ContentRecord],
        expected_topics: &[String],
    ) -> Result<CoverageAnalysis, AnalyzerError> {
        let extracted: ExtractedCoverage = complete_structured(
            self.completion.as_ref(),
            COVERAGE_CONTRACT,
            COVERAGE_SYSTEM_PROMPT,
            build_coverage_prompt(content_list, expected_topics),
            validate_coverage,
        )
        .await?;

        let coverage = convert_coverage(extracted);

        tracing::info!(
            total_topics = coverage.total_topics,
            covered_topics = coverage.covered_topics,
            coverage_percentage = coverage.coverage_percentage,
            "Coverage analysis complete"
        );

        Ok(coverage)
    }

    /// Propose content closing one gap
    pub async fn suggest_content(
        &self,
        gap_title: &str,
        gap_description: &str,
        existing_titles: &[String],
    ) -> Result<ContentSuggestion, AnalyzerError> {
        let suggestion: ExtractedSuggestion = complete_structured(
            self.completion.as_ref(),
            SUGGESTION_CONTRACT,
            SUGGESTION_SYSTEM_PROMPT,
            build_suggestion_prompt(gap_title, gap_description, existing_titles),
            validate_suggestion,
        )
        .await?;

        tracing::debug!(
            gap = %gap_title,
            title = %suggestion.title,
            sections = suggestion.outline.len(),
            "Content suggestion generated"
        );

        Ok(suggestion)
    }
}
