//! Error types shared by the analyzers

use thiserror::Error;

use crate::service::llm::CompletionError;

/// Completion response that could not be turned into the declared contract
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StructuredOutputError {
    #[error("{contract}: response is not valid JSON: {source}")]
    Malformed {
        contract: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{contract}: response does not match the schema: {source}")]
    SchemaMismatch {
        contract: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{contract}: validation failed: {}", errors.join("; "))]
    Validation {
        contract: &'static str,
        errors: Vec<String>,
    },
}

/// Error type for analyzer operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalyzerError {
    #[error("Completion service failed: {0}")]
    Upstream(#[from] CompletionError),

    #[error(transparent)]
    StructuredOutput(#[from] StructuredOutputError),
}
