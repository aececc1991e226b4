//! Validation logic for LLM-extracted content analyses

use crate::model::ContentSuggestion;
use crate::model::extracted::{ExtractedCoverage, ExtractedQualityAssessment};
use crate::service::validation::ValidationResult;

/// Validate a quality assessment: every score in [0, 1]
pub fn validate_quality(assessment: &ExtractedQualityAssessment) -> ValidationResult {
    let mut result = ValidationResult::valid();
    result.check_unit_score("completeness_score", assessment.completeness_score);
    result.check_unit_score("clarity_score", assessment.clarity_score);
    result.check_unit_score("accuracy_score", assessment.accuracy_score);
    result.check_unit_score("freshness_score", assessment.freshness_score);
    result.check_unit_score("overall_score", assessment.overall_score);
    result
}

/// Validate a coverage analysis
///
/// Checks:
/// 1. covered_topics does not exceed total_topics
/// 2. The stated percentage lies in [0, 100]
/// 3. The stated percentage agrees with the topic counts (warning only,
///    the converter recomputes it)
pub fn validate_coverage(coverage: &ExtractedCoverage) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if coverage.covered_topics > coverage.total_topics {
        result.add_error(format!(
            "covered_topics ({}) exceeds total_topics ({})",
            coverage.covered_topics, coverage.total_topics
        ));
    }

    if !(0.0..=100.0).contains(&coverage.coverage_percentage) {
        result.add_error(format!(
            "coverage_percentage must lie in [0, 100], got {}",
            coverage.coverage_percentage
        ));
    }

    if coverage.total_topics > 0 {
        let expected =
            f64::from(coverage.covered_topics) / f64::from(coverage.total_topics) * 100.0;
        if (expected - coverage.coverage_percentage).abs() > 0.5 {
            result.add_warning(format!(
                "coverage_percentage {} disagrees with {}/{} topics, using {expected:.1}",
                coverage.coverage_percentage, coverage.covered_topics, coverage.total_topics
            ));
        }
    }

    result
}

/// Validate a content suggestion
pub fn validate_suggestion(suggestion: &ContentSuggestion) -> ValidationResult {
    let mut result = ValidationResult::valid();
    result.check_not_blank("title", &suggestion.title);
    if suggestion.outline.is_empty() {
        result.add_warning("Suggestion has no outline sections".to_string());
    }
    result
}
