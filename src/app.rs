//! Application state and service initialization
//!
//! The completion service is built once from configuration and the same
//! handle is injected into every analyzer and the orchestrator.

use crate::model::Config;
use crate::service::llm::{LlmClientError, build_completion_service};
use crate::service::{
    ContentAnalyzer, FaqGenerator, GapDetector, KnowledgeGapOrchestrator, SharedCompletionService,
};

/// Application state shared by all Actix-web handlers
#[derive(Clone)]
pub struct AppState {
    /// Provider label of the injected completion service
    pub provider: &'static str,
    /// Model the provider binding targets
    pub model: String,
    pub orchestrator: KnowledgeGapOrchestrator,
}

impl AppState {
    /// Build the provider binding selected by `config` and wire the services
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let completion = build_completion_service(&config.llm)?;
        Ok(Self::with_completion_service(
            completion,
            config.llm.model_name().to_string(),
        ))
    }

    /// Wire the services over an already constructed completion service
    pub fn with_completion_service(completion: SharedCompletionService, model: String) -> Self {
        Self {
            provider: completion.provider(),
            model,
            orchestrator: KnowledgeGapOrchestrator::new(completion),
        }
    }

    pub fn gap_detector(&self) -> &GapDetector {
        self.orchestrator.gap_detector()
    }

    pub fn faq_generator(&self) -> &FaqGenerator {
        self.orchestrator.faq_generator()
    }

    pub fn content_analyzer(&self) -> &ContentAnalyzer {
        self.orchestrator.content_analyzer()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// The completion provider could not be configured
    #[error("Completion service initialization failed: {0}")]
    CompletionService(#[from] LlmClientError),
}
