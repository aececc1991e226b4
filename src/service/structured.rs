//! Structured output step shared by all analyzers
//!
//! Renders a contract's JSON schema into format instructions, issues the
//! completion call and turns the raw text into one validated value. Parsing
//! happens in three distinct steps so callers can tell malformed JSON,
//! schema mismatches and range violations apart.

use std::time::Instant;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::service::error::{AnalyzerError, StructuredOutputError};
use crate::service::llm::{CompletionRequest, CompletionService};
use crate::service::validation::ValidationResult;

/// Format instructions describing the contract `T`
pub fn format_instructions<T: JsonSchema>() -> String {
    let schema = schemars::schema_for!(T);
    let rendered = serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string());
    format!(
        "The output must be a single JSON object that conforms to the JSON schema below.\n\n```json\n{rendered}\n```\n\nRespond with the JSON object only, without commentary."
    )
}

/// Append the contract's format instructions to fixed system instructions
pub fn build_preamble<T: JsonSchema>(instructions: &str) -> String {
    format!("{}\n\n{}", instructions.trim_end(), format_instructions::<T>())
}

/// Locate the JSON payload in a reply
///
/// A bare JSON value is taken as is. Otherwise the body of the first Markdown
/// code fence is used, wherever it starts and whether or not it spans lines.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };
    // Drop the info string ("json") of the opening fence
    let rest = trimmed[open + 3..].trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = rest.find("```").map_or(rest, |close| &rest[..close]);
    body.trim()
}

/// Parse and validate a raw completion into the contract `T`
pub fn parse_structured<T, V>(
    contract: &'static str,
    raw: &str,
    validate: V,
) -> Result<T, StructuredOutputError>
where
    T: DeserializeOwned,
    V: FnOnce(&T) -> ValidationResult,
{
    let value: serde_json::Value = serde_json::from_str(extract_json(raw))
        .map_err(|source| StructuredOutputError::Malformed { contract, source })?;

    let parsed: T = serde_json::from_value(value)
        .map_err(|source| StructuredOutputError::SchemaMismatch { contract, source })?;

    let validation = validate(&parsed);
    if !validation.is_valid {
        tracing::error!(
            contract,
            errors = ?validation.errors,
            "Structured output failed validation"
        );
        return Err(StructuredOutputError::Validation {
            contract,
            errors: validation.errors,
        });
    }

    if !validation.warnings.is_empty() {
        tracing::warn!(
            contract,
            warnings = ?validation.warnings,
            "Structured output produced quality warnings"
        );
    }

    Ok(parsed)
}

/// Issue one completion call and return the validated contract value
pub async fn complete_structured<T, V>(
    service: &dyn CompletionService,
    contract: &'static str,
    instructions: &str,
    prompt: String,
    validate: V,
) -> Result<T, AnalyzerError>
where
    T: DeserializeOwned + JsonSchema,
    V: FnOnce(&T) -> ValidationResult,
{
    let request = CompletionRequest {
        contract,
        preamble: build_preamble::<T>(instructions),
        prompt,
    };

    tracing::debug!(
        contract,
        provider = service.provider(),
        prompt_length = request.prompt.len(),
        "Initiating completion call"
    );

    let start_time = Instant::now();
    let raw = match service.complete(&request).await {
        Ok(raw) => {
            tracing::info!(
                contract,
                provider = service.provider(),
                elapsed_ms = start_time.elapsed().as_millis(),
                prompt_length = request.prompt.len(),
                "Completion call completed successfully"
            );
            raw
        }
        Err(e) => {
            tracing::error!(
                contract,
                provider = service.provider(),
                elapsed_ms = start_time.elapsed().as_millis(),
                prompt_length = request.prompt.len(),
                error = %e,
                "Completion call failed"
            );
            return Err(e.into());
        }
    };

    Ok(parse_structured(contract, &raw, validate)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::ExtractedGapAnalysis;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct Scored {
        score: f64,
    }

    fn check_scored(scored: &Scored) -> ValidationResult {
        let mut result = ValidationResult::valid();
        result.check_unit_score("score", scored.score);
        result
    }

    #[test]
    fn test_parses_plain_json() {
        let scored: Scored = parse_structured("scored", r#"{"score": 0.4}"#, check_scored).unwrap();
        assert_eq!(scored.score, 0.4);
    }

    #[test]
    fn test_parses_fenced_json() {
        let raw = "```json\n{\"score\": 0.9}\n```";
        let scored: Scored = parse_structured("scored", raw, check_scored).unwrap();
        assert_eq!(scored.score, 0.9);
    }

    #[test]
    fn test_parses_fence_after_prose() {
        let raw = "Here is the analysis:\n```json\n{\"score\": 0.4}\n```\nLet me know if you need more.";
        let scored: Scored = parse_structured("scored", raw, check_scored).unwrap();
        assert_eq!(scored.score, 0.4);
    }

    #[test]
    fn test_parses_single_line_fence() {
        let raw = "```json {\"score\": 0.4} ```";
        let scored: Scored = parse_structured("scored", raw, check_scored).unwrap();
        assert_eq!(scored.score, 0.4);

        let raw = "```{\"score\": 0.5}```";
        let scored: Scored = parse_structured("scored", raw, check_scored).unwrap();
        assert_eq!(scored.score, 0.5);
    }

    #[test]
    fn test_reply_without_json_is_malformed() {
        for raw in ["I could not analyze this data.", "```json\n```", ""] {
            let result: Result<Scored, _> = parse_structured("scored", raw, check_scored);
            assert!(
                matches!(result, Err(StructuredOutputError::Malformed { .. })),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        let result: Result<Scored, _> = parse_structured("scored", "{score: ", check_scored);
        assert!(matches!(
            result,
            Err(StructuredOutputError::Malformed { contract: "scored", .. })
        ));
    }

    #[test]
    fn test_schema_mismatch() {
        let result: Result<Scored, _> =
            parse_structured("scored", r#"{"score": "high"}"#, check_scored);
        assert!(matches!(
            result,
            Err(StructuredOutputError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_non_object_value_is_rejected() {
        let result: Result<Scored, _> = parse_structured("scored", r#"["score", 1]"#, check_scored);
        assert!(matches!(
            result,
            Err(StructuredOutputError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_out_of_range_score_is_not_clamped() {
        let result: Result<Scored, _> = parse_structured("scored", r#"{"score": 1.5}"#, check_scored);
        match result {
            Err(StructuredOutputError::Validation { errors, .. }) => {
                assert!(errors[0].contains("score"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_preamble_appends_schema() {
        let preamble = build_preamble::<ExtractedGapAnalysis>("You are an analyst.\n");
        assert!(preamble.starts_with("You are an analyst.\n\nThe output must be"));
        assert!(preamble.contains("analysis_summary"));
        assert!(preamble.contains("impact_score"));
        assert!(!preamble.contains("total_queries_analyzed"));
    }
}
