pub mod content;
pub mod error;
pub mod faqs;
pub mod gaps;
pub mod llm;
pub mod orchestrator;
pub mod shaping;
pub mod structured;
pub mod validation;

#[cfg(test)]
pub mod testing;

pub use content::ContentAnalyzer;
pub use error::AnalyzerError;
pub use faqs::FaqGenerator;
pub use gaps::GapDetector;
pub use llm::SharedCompletionService;
pub use orchestrator::{KnowledgeGapOrchestrator, OrchestratorError};
