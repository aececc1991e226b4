//! Validation logic for LLM-extracted gap analyses

use crate::model::extracted::ExtractedGapAnalysis;
use crate::service::validation::ValidationResult;

/// Validate an extracted gap analysis
///
/// Checks:
/// 1. Every impact score and the coverage score lie in [0, 1]
/// 2. Gaps carry a title and description (warning if blank)
/// 3. Gaps cite evidence (warning if none)
pub fn validate_gap_analysis(analysis: &ExtractedGapAnalysis) -> ValidationResult {
    let mut result = ValidationResult::valid();

    result.check_unit_score("coverage_score", analysis.coverage_score);

    for (i, gap) in analysis.gaps.iter().enumerate() {
        result.check_unit_score(&format!("gaps[{i}].impact_score"), gap.impact_score);
        result.check_not_blank(&format!("gaps[{i}].title"), &gap.title);
        result.check_not_blank(&format!("gaps[{i}].description"), &gap.description);

        if gap.evidence.is_empty() {
            result.add_warning(format!("Gap '{}' cites no evidence", gap.title));
        }
    }

    result
}
