//! Converters from extracted gap analyses to domain models

use crate::model::GapDetectionResult;
use crate::model::extracted::ExtractedGapAnalysis;

/// Convert an extracted analysis, stamping the caller's true input counts
pub fn convert_gap_analysis(
    extracted: ExtractedGapAnalysis,
    queries_analyzed: usize,
    tickets_analyzed: usize,
) -> GapDetectionResult {
    GapDetectionResult {
        gaps: extracted.gaps,
        analysis_summary: extracted.analysis_summary,
        total_queries_analyzed: queries_analyzed,
        total_tickets_analyzed: tickets_analyzed,
        coverage_score: extracted.coverage_score,
    }
}
