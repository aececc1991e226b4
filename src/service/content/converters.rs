//! Converters from extracted content analyses to domain models

use crate::model::extracted::{ExtractedCoverage, ExtractedQualityAssessment};
use crate::model::{ContentQuality, ContentRecord, CoverageAnalysis};

/// Coverage reported when there are no topics to cover
pub const EMPTY_TOPICS_COVERAGE: f64 = 0.0;

/// Convert a quality assessment, taking identity from the assessed record
pub fn convert_quality(
    extracted: ExtractedQualityAssessment,
    record: &ContentRecord,
) -> ContentQuality {
    ContentQuality {
        content_id: record.id.clone(),
        title: record.display_title().to_string(),
        completeness_score: extracted.completeness_score,
        clarity_score: extracted.clarity_score,
        accuracy_score: extracted.accuracy_score,
        freshness_score: extracted.freshness_score,
        overall_score: extracted.overall_score,
        issues: extracted.issues,
        improvements: extracted.improvements,
    }
}

/// Convert a coverage analysis with a percentage derived from the counts
pub fn convert_coverage(extracted: ExtractedCoverage) -> CoverageAnalysis {
    let coverage_percentage = if extracted.total_topics == 0 {
        EMPTY_TOPICS_COVERAGE
    } else {
        f64::from(extracted.covered_topics) / f64::from(extracted.total_topics) * 100.0
    };

    CoverageAnalysis {
        total_topics: extracted.total_topics,
        covered_topics: extracted.covered_topics,
        coverage_percentage,
        well_covered: extracted.well_covered,
        partially_covered: extracted.partially_covered,
        not_covered: extracted.not_covered,
        recommendations: extracted.recommendations,
    }
}
