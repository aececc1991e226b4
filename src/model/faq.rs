//! FAQ models

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated question/answer pair with provenance and confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct GeneratedFaq {
    /// Clear, user-friendly question
    pub question: String,
    /// Comprehensive, helpful answer
    pub answer: String,
    pub category: String,
    /// Confidence in answer quality between 0 and 1
    pub confidence_score: f64,
    /// Brief summary of the sources used
    #[serde(default)]
    pub source_summary: String,
    #[serde(default)]
    pub related_questions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Result of an FAQ generation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqGenerationResult {
    pub faqs: Vec<GeneratedFaq>,
    /// Tickets plus queries supplied; documentation is not counted
    pub total_sources_analyzed: usize,
    pub categories_covered: Vec<String>,
    pub generation_summary: String,
}
