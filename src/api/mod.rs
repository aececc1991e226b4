//! HTTP surface over the analyzers and the orchestrator

use actix_web::{ResponseError, error::JsonPayloadError, web};

pub mod analysis;
pub mod content;
pub mod error;
pub mod faqs;
pub mod gaps;
pub mod health;
pub mod openapi;

pub use error::ApiError;

/// Largest accepted request body
const MAX_JSON_PAYLOAD: usize = 8 * 1024 * 1024;

/// JSON extractor config rendering body errors in the unified error format
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(|err: JsonPayloadError, _req| {
            let api_error = ApiError::BadRequest(err.to_string());
            let response = api_error.error_response();
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

/// Reject a blank required text field
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("question", "How do I export?").is_ok());
        assert!(matches!(
            require_text("question", "  "),
            Err(ApiError::BadRequest(msg)) if msg == "question must not be empty"
        ));
    }
}
