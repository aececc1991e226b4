//! Content quality, coverage and suggestion models

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quality assessment for a single content item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentQuality {
    /// Identifier of the assessed record, never taken from the model
    pub content_id: String,
    pub title: String,
    pub completeness_score: f64,
    pub clarity_score: f64,
    pub accuracy_score: f64,
    pub freshness_score: f64,
    pub overall_score: f64,
    pub issues: Vec<String>,
    pub improvements: Vec<String>,
}

/// Existing content compared against an expected topic list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoverageAnalysis {
    pub total_topics: u32,
    pub covered_topics: u32,
    /// covered_topics / total_topics * 100, or 0.0 when there are no topics
    pub coverage_percentage: f64,
    pub well_covered: Vec<String>,
    pub partially_covered: Vec<String>,
    pub not_covered: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Proposed piece of content addressing a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct ContentSuggestion {
    pub title: String,
    pub summary: String,
    /// Content outline sections, in reading order
    pub outline: Vec<String>,
    pub priority: String,
    pub target_audience: String,
    pub estimated_effort: String,
    #[serde(default)]
    pub seo_keywords: Vec<String>,
    #[serde(default)]
    pub related_content: Vec<String>,
}

/// Aggregate of a bulk content analysis
///
/// The bulk quality entrypoint fills `quality_assessments` and `summary` only;
/// `coverage` stays `None` and `suggestions` stays empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentAnalysisResult {
    pub quality_assessments: Vec<ContentQuality>,
    pub coverage: Option<CoverageAnalysis>,
    pub suggestions: Vec<ContentSuggestion>,
    pub summary: String,
}
