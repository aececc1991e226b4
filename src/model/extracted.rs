//! LLM-extractable models
//!
//! These are the structured output contracts handed to the completion
//! service. Fields computed locally (identities, input counts) are absent;
//! converters in each service fill them from the caller's input.

use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{ContentSuggestion, DetectedGap, GeneratedFaq};

/// Gap detection output
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedGapAnalysis {
    #[serde(default)]
    pub gaps: Vec<DetectedGap>,
    /// Summary of the analysis
    pub analysis_summary: String,
    /// Fraction of user demand already served by existing content, 0-1
    #[serde(default)]
    pub coverage_score: f64,
}

/// FAQ generation output
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedFaqSet {
    #[serde(default)]
    pub faqs: Vec<GeneratedFaq>,
    #[serde(default)]
    pub categories_covered: Vec<String>,
    #[serde(default)]
    pub generation_summary: String,
}

/// Quality assessment output
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedQualityAssessment {
    /// Completeness 0-1
    pub completeness_score: f64,
    /// Clarity 0-1
    pub clarity_score: f64,
    /// Accuracy 0-1
    pub accuracy_score: f64,
    /// Freshness 0-1
    pub freshness_score: f64,
    /// Overall quality 0-1
    pub overall_score: f64,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Coverage analysis output
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedCoverage {
    #[serde(deserialize_with = "whole_number")]
    pub total_topics: u32,
    #[serde(deserialize_with = "whole_number")]
    pub covered_topics: u32,
    pub coverage_percentage: f64,
    #[serde(default)]
    pub well_covered: Vec<String>,
    #[serde(default)]
    pub partially_covered: Vec<String>,
    #[serde(default)]
    pub not_covered: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Single FAQ revision output
pub type ExtractedFaq = GeneratedFaq;

/// Content suggestion output
pub type ExtractedSuggestion = ContentSuggestion;

/// Topic counts written as `2.0` are accepted; fractional counts are not
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(D::Error::custom(format!(
            "expected a whole non-negative count, got {value}"
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coverage(total: serde_json::Value, covered: serde_json::Value) -> serde_json::Value {
        json!({ "total_topics": total, "covered_topics": covered, "coverage_percentage": 50.0 })
    }

    #[test]
    fn test_topic_counts_accept_integral_floats() {
        let parsed: ExtractedCoverage = serde_json::from_value(coverage(json!(2.0), json!(1))).unwrap();
        assert_eq!(parsed.total_topics, 2);
        assert_eq!(parsed.covered_topics, 1);
    }

    #[test]
    fn test_topic_counts_reject_fractions_and_negatives() {
        for (total, covered) in [(json!(2.5), json!(1)), (json!(2), json!(-1)), (json!("2"), json!(1))] {
            let result = serde_json::from_value::<ExtractedCoverage>(coverage(total, covered));
            assert!(result.is_err());
        }
    }
}
