//! Aggregate report of one orchestrated analysis run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    ContentRecord, ContentSuggestion, DetectedGap, GeneratedFaq, SearchQuery, SupportTicket,
    UserFeedback,
};

fn enabled() -> bool {
    true
}

/// Inputs and switches for one orchestrated analysis run
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub search_queries: Vec<SearchQuery>,
    #[serde(default)]
    pub support_tickets: Vec<SupportTicket>,
    #[serde(default)]
    pub user_feedback: Vec<UserFeedback>,
    #[serde(default)]
    pub existing_content: Vec<ContentRecord>,
    #[serde(default)]
    pub expected_topics: Vec<String>,
    #[serde(default = "enabled")]
    pub generate_faqs: bool,
    #[serde(default = "enabled")]
    pub generate_suggestions: bool,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            search_queries: Vec::new(),
            support_tickets: Vec::new(),
            user_feedback: Vec::new(),
            existing_content: Vec::new(),
            expected_topics: Vec::new(),
            generate_faqs: true,
            generate_suggestions: true,
        }
    }
}

impl AnalysisRequest {
    /// Titles of the existing content, in input order
    pub fn content_titles(&self) -> Vec<String> {
        self.existing_content
            .iter()
            .map(|c| c.title.clone().unwrap_or_default())
            .collect()
    }
}

/// Aggregate output of one orchestration run
///
/// Only the orchestrator mutates a report, and only while the run is in
/// flight. Once finalized (duration measured, summary composed) it is handed
/// to the caller and never touched again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub id: String,
    pub gaps_found: usize,
    pub faqs_generated: usize,
    pub suggestions_created: usize,
    /// Coverage percentage (0-100) from the coverage stage, 0.0 when it did not run
    pub coverage_score: f64,
    pub gaps: Vec<DetectedGap>,
    pub faqs: Vec<GeneratedFaq>,
    pub suggestions: Vec<ContentSuggestion>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub duration_seconds: f64,
}

impl AnalysisReport {
    /// Allocate an empty report for a new run
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gaps_found: 0,
            faqs_generated: 0,
            suggestions_created: 0,
            coverage_score: 0.0,
            gaps: Vec::new(),
            faqs: Vec::new(),
            suggestions: Vec::new(),
            summary: String::new(),
            created_at: Utc::now(),
            duration_seconds: 0.0,
        }
    }

    pub fn set_gaps(&mut self, gaps: Vec<DetectedGap>) {
        self.gaps_found = gaps.len();
        self.gaps = gaps;
    }

    pub fn set_faqs(&mut self, faqs: Vec<GeneratedFaq>) {
        self.faqs_generated = faqs.len();
        self.faqs = faqs;
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<ContentSuggestion>) {
        self.suggestions_created = suggestions.len();
        self.suggestions = suggestions;
    }

    pub fn critical_gaps(&self) -> usize {
        crate::model::gap::count_critical(&self.gaps)
    }
}
