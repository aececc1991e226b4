//! Validation logic for LLM-generated FAQs

use crate::model::GeneratedFaq;
use crate::model::extracted::ExtractedFaqSet;
use crate::service::validation::ValidationResult;

/// Validate a generated FAQ set
pub fn validate_faq_set(set: &ExtractedFaqSet) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for (i, faq) in set.faqs.iter().enumerate() {
        check_faq(&mut result, &format!("faqs[{i}]"), faq);
    }
    result
}

/// Validate a single revised FAQ
pub fn validate_faq(faq: &GeneratedFaq) -> ValidationResult {
    let mut result = ValidationResult::valid();
    check_faq(&mut result, "faq", faq);
    result
}

fn check_faq(result: &mut ValidationResult, path: &str, faq: &GeneratedFaq) {
    result.check_unit_score(&format!("{path}.confidence_score"), faq.confidence_score);
    result.check_not_blank(&format!("{path}.question"), &faq.question);
    result.check_not_blank(&format!("{path}.answer"), &faq.answer);
}
