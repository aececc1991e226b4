pub mod config;
pub mod content;
pub mod extracted;
pub mod faq;
pub mod gap;
pub mod records;
pub mod report;

pub use config::{Config, LlmConfig, LlmProvider};
pub use content::{
    ContentAnalysisResult, ContentQuality, ContentSuggestion, CoverageAnalysis,
};
pub use faq::{FaqGenerationResult, GeneratedFaq};
pub use gap::{DetectedGap, GapDetectionResult, GapPriority};
pub use records::{ContentRecord, SearchQuery, SupportTicket, UserFeedback};
pub use report::{AnalysisReport, AnalysisRequest};
