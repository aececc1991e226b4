//! Knowledge gap models

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Priority assigned to a detected gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// A named, evidenced deficiency in existing documentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct DetectedGap {
    /// Short title for the gap
    pub title: String,
    /// Detailed description of what is missing
    pub description: String,
    /// Topic category
    pub topic: String,
    pub priority: GapPriority,
    /// Supporting evidence
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Related search queries
    #[serde(default)]
    pub search_queries: Vec<String>,
    /// Impact score between 0 and 1
    pub impact_score: f64,
    /// Brief outline of the content that would close the gap
    #[serde(default)]
    pub suggested_content: String,
}

/// Result of a gap detection pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GapDetectionResult {
    /// Gaps in the order the model reported them
    pub gaps: Vec<DetectedGap>,
    pub analysis_summary: String,
    /// Number of search queries supplied by the caller
    pub total_queries_analyzed: usize,
    /// Number of support tickets supplied by the caller
    pub total_tickets_analyzed: usize,
    /// Fraction of demand already served by existing content (0-1)
    pub coverage_score: f64,
}

impl GapDetectionResult {
    /// Gaps flagged as critical
    pub fn critical_count(&self) -> usize {
        count_critical(&self.gaps)
    }
}

pub(crate) fn count_critical(gaps: &[DetectedGap]) -> usize {
    gaps.iter()
        .filter(|g| g.priority == GapPriority::Critical)
        .count()
}
