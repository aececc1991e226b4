//! Converters from extracted FAQ sets to domain models

use crate::model::FaqGenerationResult;
use crate::model::extracted::ExtractedFaqSet;

/// Convert an extracted FAQ set
///
/// `total_sources_analyzed` counts tickets and queries only. Documentation is
/// reference material and is deliberately left out of the count.
pub fn convert_faq_set(
    extracted: ExtractedFaqSet,
    tickets_analyzed: usize,
    queries_analyzed: usize,
) -> FaqGenerationResult {
    FaqGenerationResult {
        faqs: extracted.faqs,
        total_sources_analyzed: tickets_analyzed + queries_analyzed,
        categories_covered: extracted.categories_covered,
        generation_summary: extracted.generation_summary,
    }
}
