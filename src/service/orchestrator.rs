//! Knowledge gap analysis orchestrator
//!
//! Sequences the analyzers over one [`AnalysisReport`]:
//!
//! 1. Detect gaps from every source (always)
//! 2. Coverage against expected topics (when topics and content are given)
//! 3. FAQ generation (when enabled and tickets are given)
//! 4. Content suggestions for the first gaps, in detection order (when enabled)
//! 5. Finalize: duration and summary
//!
//! Stages run strictly in order and fail fast. A failing stage drops the
//! partially populated report.

use std::fmt;
use std::time::Instant;

use crate::model::{
    AnalysisReport, AnalysisRequest, ContentAnalysisResult, ContentRecord, FaqGenerationResult,
    GapDetectionResult, SearchQuery, SupportTicket,
};
use crate::service::content::ContentAnalyzer;
use crate::service::error::AnalyzerError;
use crate::service::faqs::FaqGenerator;
use crate::service::gaps::GapDetector;
use crate::service::llm::SharedCompletionService;

/// Gaps that receive a content suggestion per run
const MAX_SUGGESTED_GAPS: usize = 5;

/// Content items assessed by a bulk quality analysis
const MAX_QUALITY_ITEMS: usize = 20;

/// Stage of an orchestrated run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Detect,
    Coverage,
    FaqGeneration,
    Suggestions,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Detect => "gap detection",
            Stage::Coverage => "coverage analysis",
            Stage::FaqGeneration => "FAQ generation",
            Stage::Suggestions => "content suggestions",
        };
        f.write_str(name)
    }
}

/// Error type for orchestrated runs
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OrchestratorError {
    /// A stage failed; results of earlier stages are discarded
    #[error("Analysis aborted during {stage}: {source}")]
    StageFailed {
        stage: Stage,
        #[source]
        source: AnalyzerError,
    },
}

trait StageContext<T> {
    fn in_stage(self, stage: Stage) -> Result<T, OrchestratorError>;
}

impl<T> StageContext<T> for Result<T, AnalyzerError> {
    fn in_stage(self, stage: Stage) -> Result<T, OrchestratorError> {
        self.map_err(|source| {
            tracing::error!(%stage, error = %source, "Analysis stage failed");
            OrchestratorError::StageFailed { stage, source }
        })
    }
}

/// Which optional stages ran, for the summary
#[derive(Debug, Default)]
struct StagesRun {
    coverage: bool,
    faqs: bool,
    suggestions: bool,
}

/// Coordinates gap detection, FAQ generation and content analysis
#[derive(Clone)]
pub struct KnowledgeGapOrchestrator {
    gap_detector: GapDetector,
    faq_generator: FaqGenerator,
    content_analyzer: ContentAnalyzer,
}

impl KnowledgeGapOrchestrator {
    /// Build every analyzer over the same completion service handle
    pub fn new(completion: SharedCompletionService) -> Self {
        Self {
            gap_detector: GapDetector::new(completion.clone()),
            faq_generator: FaqGenerator::new(completion.clone()),
            content_analyzer: ContentAnalyzer::new(completion),
        }
    }

    pub fn gap_detector(&self) -> &GapDetector {
        &self.gap_detector
    }

    pub fn faq_generator(&self) -> &FaqGenerator {
        &self.faq_generator
    }

    pub fn content_analyzer(&self) -> &ContentAnalyzer {
        &self.content_analyzer
    }

    /// Run the complete analysis
    pub async fn run_full_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport, OrchestratorError> {
        let start_time = Instant::now();
        let mut report = AnalysisReport::start();
        let mut ran = StagesRun::default();

        tracing::info!(
            report_id = %report.id,
            queries = request.search_queries.len(),
            tickets = request.support_tickets.len(),
            feedback = request.user_feedback.len(),
            existing_content = request.existing_content.len(),
            expected_topics = request.expected_topics.len(),
            "Starting knowledge gap analysis"
        );

        // Existing titles double as negative evidence for detection
        let content_titles = request.content_titles();
        let gap_result = self
            .gap_detector
            .detect(
                &request.search_queries,
                &request.support_tickets,
                &request.user_feedback,
                &content_titles,
            )
            .await
            .in_stage(Stage::Detect)?;
        report.set_gaps(gap_result.gaps);
        tracing::info!(
            report_id = %report.id,
            gaps_found = report.gaps_found,
            critical = report.critical_gaps(),
            "Gap detection stage complete"
        );

        if !request.expected_topics.is_empty() && !request.existing_content.is_empty() {
            let coverage = self
                .content_analyzer
                .analyze_coverage(&request.existing_content, &request.expected_topics)
                .await
                .in_stage(Stage::Coverage)?;
            report.coverage_score = coverage.coverage_percentage;
            ran.coverage = true;
            tracing::info!(
                report_id = %report.id,
                covered_topics = coverage.covered_topics,
                total_topics = coverage.total_topics,
                "Coverage stage complete"
            );
        } else {
            tracing::debug!(report_id = %report.id, "Skipping coverage: no expected topics or content");
        }

        if request.generate_faqs && !request.support_tickets.is_empty() {
            let faq_result = self
                .faq_generator
                .generate(
                    &request.support_tickets,
                    &request.search_queries,
                    &request.existing_content,
                )
                .await
                .in_stage(Stage::FaqGeneration)?;
            report.set_faqs(faq_result.faqs);
            ran.faqs = true;
            tracing::info!(
                report_id = %report.id,
                faqs_generated = report.faqs_generated,
                "FAQ generation stage complete"
            );
        } else {
            tracing::debug!(report_id = %report.id, "Skipping FAQ generation: disabled or no tickets");
        }

        if request.generate_suggestions {
            let mut suggestions = Vec::new();
            for gap in report.gaps.iter().take(MAX_SUGGESTED_GAPS) {
                let suggestion = self
                    .content_analyzer
                    .suggest_content(&gap.title, &gap.description, &content_titles)
                    .await
                    .in_stage(Stage::Suggestions)?;
                suggestions.push(suggestion);
            }
            report.set_suggestions(suggestions);
            ran.suggestions = true;
            tracing::info!(
                report_id = %report.id,
                suggestions_created = report.suggestions_created,
                "Suggestion stage complete"
            );
        } else {
            tracing::debug!(report_id = %report.id, "Skipping content suggestions: disabled");
        }

        report.duration_seconds = start_time.elapsed().as_secs_f64();
        report.summary = compose_summary(&report, &ran);

        tracing::info!(
            report_id = %report.id,
            gaps_found = report.gaps_found,
            faqs_generated = report.faqs_generated,
            suggestions_created = report.suggestions_created,
            coverage_score = report.coverage_score,
            duration_seconds = report.duration_seconds,
            "Knowledge gap analysis complete"
        );

        Ok(report)
    }

    /// Run gap detection alone
    pub async fn detect_gaps_only(
        &self,
        search_queries: &[SearchQuery],
        support_tickets: &[SupportTicket],
        existing_titles: &[String],
    ) -> Result<GapDetectionResult, AnalyzerError> {
        self.gap_detector
            .detect(search_queries, support_tickets, &[], existing_titles)
            .await
    }

    /// Run FAQ generation alone
    pub async fn generate_faqs_only(
        &self,
        support_tickets: &[SupportTicket],
        search_queries: &[SearchQuery],
    ) -> Result<FaqGenerationResult, AnalyzerError> {
        self.faq_generator
            .generate(support_tickets, search_queries, &[])
            .await
    }

    /// Assess the quality of up to the first 20 content items
    pub async fn analyze_content_quality(
        &self,
        content_list: &[ContentRecord],
    ) -> Result<ContentAnalysisResult, AnalyzerError> {
        let mut result = ContentAnalysisResult::default();

        for content in content_list.iter().take(MAX_QUALITY_ITEMS) {
            let quality = self.content_analyzer.analyze_quality(content).await?;
            result.quality_assessments.push(quality);
        }

        result.summary = quality_summary(&result);

        tracing::info!(
            assessed = result.quality_assessments.len(),
            supplied = content_list.len(),
            "Content quality analysis complete"
        );

        Ok(result)
    }
}

/// Compose the report summary from the stages that ran
fn compose_summary(report: &AnalysisReport, ran: &StagesRun) -> String {
    let mut parts = vec![
        format!("Analysis completed in {:.1} seconds.", report.duration_seconds),
        format!("Identified {} knowledge gaps.", report.gaps_found),
    ];

    if ran.faqs {
        parts.push(format!("Generated {} FAQs.", report.faqs_generated));
    }

    if ran.suggestions {
        parts.push(format!(
            "Created {} content suggestions.",
            report.suggestions_created
        ));
    }

    if ran.coverage {
        parts.push(format!("Current coverage: {:.1}%.", report.coverage_score));
    }

    let critical = report.critical_gaps();
    if critical > 0 {
        parts.push(format!(
            "ATTENTION: {critical} critical gaps require immediate attention."
        ));
    }

    parts.join(" ")
}

fn quality_summary(result: &ContentAnalysisResult) -> String {
    let assessed = result.quality_assessments.len();
    if assessed == 0 {
        return "No content provided for quality analysis.".to_string();
    }
    let mean = result
        .quality_assessments
        .iter()
        .map(|q| q.overall_score)
        .sum::<f64>()
        / assessed as f64;
    format!("Analyzed {assessed} pieces of content. Average quality score: {mean:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GapPriority;
    use crate::service::content::{COVERAGE_CONTRACT, QUALITY_CONTRACT, SUGGESTION_CONTRACT};
    use crate::service::faqs::FAQ_SET_CONTRACT;
    use crate::service::gaps::GAP_ANALYSIS_CONTRACT;
    use crate::service::testing::StubCompletionService;
    use serde_json::json;

    fn gap_json(title: &str, priority: &str) -> serde_json::Value {
        json!({
            "title": title,
            "description": format!("{title} description"),
            "topic": "general",
            "priority": priority,
            "evidence": ["search logs"],
            "search_queries": [],
            "impact_score": 0.5,
            "suggested_content": ""
        })
    }

    fn gaps_reply(gaps: Vec<serde_json::Value>) -> serde_json::Value {
        json!({ "gaps": gaps, "analysis_summary": "summary", "coverage_score": 0.3 })
    }

    fn suggestion_json(title: &str) -> serde_json::Value {
        json!({
            "title": title,
            "summary": "summary",
            "outline": ["Intro"],
            "priority": "high",
            "target_audience": "Users",
            "estimated_effort": "1 day"
        })
    }

    fn faq_reply(count: usize) -> serde_json::Value {
        let faqs: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "question": format!("Question {i}?"),
                    "answer": "Answer.",
                    "category": "general",
                    "confidence_score": 0.7
                })
            })
            .collect();
        json!({ "faqs": faqs, "categories_covered": ["general"] })
    }

    fn content(title: &str) -> ContentRecord {
        ContentRecord {
            id: title.to_lowercase().replace(' ', "-"),
            title: Some(title.to_string()),
            content: format!("{title} body"),
            ..ContentRecord::default()
        }
    }

    fn assert_counts_consistent(report: &AnalysisReport) {
        assert_eq!(report.gaps_found, report.gaps.len());
        assert_eq!(report.faqs_generated, report.faqs.len());
        assert_eq!(report.suggestions_created, report.suggestions.len());
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let stub = StubCompletionService::new()
            .reply(
                GAP_ANALYSIS_CONTRACT,
                gaps_reply(vec![gap_json("Export workflow undocumented", "high")]),
            )
            .reply(
                COVERAGE_CONTRACT,
                json!({
                    "total_topics": 2,
                    "covered_topics": 1,
                    "coverage_percentage": 50.0,
                    "well_covered": ["billing"],
                    "not_covered": ["security"]
                }),
            )
            .reply(SUGGESTION_CONTRACT, suggestion_json("Exporting your data"))
            .shared();
        let orchestrator = KnowledgeGapOrchestrator::new(stub.clone());

        let request = AnalysisRequest {
            search_queries: ["reset password", "export data", "export data"]
                .into_iter()
                .map(SearchQuery::from)
                .collect(),
            existing_content: vec![content("Billing FAQ")],
            expected_topics: vec!["billing".to_string(), "security".to_string()],
            generate_faqs: false,
            generate_suggestions: true,
            ..AnalysisRequest::default()
        };

        let report = orchestrator.run_full_analysis(&request).await.unwrap();

        assert_eq!(report.gaps_found, 1);
        assert_eq!(report.coverage_score, 50.0);
        assert_eq!(report.faqs_generated, 0);
        assert_eq!(report.suggestions_created, 1);
        assert!(report.summary.contains("Identified 1 knowledge gaps"));
        assert!(report.summary.contains("Current coverage: 50.0%."));
        assert!(report.summary.contains("Created 1 content suggestions."));
        assert!(!report.summary.contains("FAQs"));
        assert!(!report.summary.contains("ATTENTION"));
        assert!(report.duration_seconds >= 0.0);
        assert_counts_consistent(&report);

        // Existing titles are passed to detection as negative evidence
        let detect = &stub.requests_for(GAP_ANALYSIS_CONTRACT)[0];
        assert!(detect.prompt.contains("## Existing Content (for reference)\nBilling FAQ\n"));
        assert!(stub.requests_for(FAQ_SET_CONTRACT).is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_cover_first_five_gaps_in_detection_order() {
        let priorities = ["low", "critical", "medium", "high", "low", "critical", "high"];
        let gaps: Vec<_> = priorities
            .iter()
            .enumerate()
            .map(|(i, p)| gap_json(&format!("Gap {i}"), p))
            .collect();
        let mut stub = StubCompletionService::new().reply(GAP_ANALYSIS_CONTRACT, gaps_reply(gaps));
        for i in 0..5 {
            stub = stub.reply(SUGGESTION_CONTRACT, suggestion_json(&format!("Article {i}")));
        }
        let stub = stub.shared();
        let orchestrator = KnowledgeGapOrchestrator::new(stub.clone());

        let report = orchestrator
            .run_full_analysis(&AnalysisRequest::default())
            .await
            .unwrap();

        assert_eq!(report.gaps_found, 7);
        assert_eq!(report.suggestions_created, 5);
        let prompts: Vec<String> = stub
            .requests_for(SUGGESTION_CONTRACT)
            .into_iter()
            .map(|r| r.prompt)
            .collect();
        assert_eq!(prompts.len(), 5);
        for (i, prompt) in prompts.iter().enumerate() {
            assert!(prompt.contains(&format!("Gap Title: Gap {i}\n")));
        }
        let titles: Vec<_> = report.suggestions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Article 0", "Article 1", "Article 2", "Article 3", "Article 4"]
        );
        assert!(
            report
                .summary
                .contains("ATTENTION: 2 critical gaps require immediate attention.")
        );
        assert_counts_consistent(&report);
    }

    #[tokio::test]
    async fn test_faq_stage_runs_with_tickets() {
        let stub = StubCompletionService::new()
            .reply(GAP_ANALYSIS_CONTRACT, gaps_reply(vec![]))
            .reply(FAQ_SET_CONTRACT, faq_reply(3))
            .shared();
        let orchestrator = KnowledgeGapOrchestrator::new(stub.clone());
        let request = AnalysisRequest {
            support_tickets: vec![SupportTicket::default(); 2],
            generate_suggestions: false,
            ..AnalysisRequest::default()
        };

        let report = orchestrator.run_full_analysis(&request).await.unwrap();

        assert_eq!(report.faqs_generated, 3);
        assert_eq!(report.suggestions_created, 0);
        assert!(report.summary.contains("Generated 3 FAQs."));
        assert!(!report.summary.contains("content suggestions"));
        assert!(!report.summary.contains("Current coverage"));
        assert_counts_consistent(&report);
    }

    #[tokio::test]
    async fn test_optional_stages_skipped_without_inputs() {
        let stub = StubCompletionService::new()
            .reply(GAP_ANALYSIS_CONTRACT, gaps_reply(vec![gap_json("A", "low")]))
            .shared();
        let orchestrator = KnowledgeGapOrchestrator::new(stub.clone());
        let request = AnalysisRequest {
            // Topics without content: coverage must not run
            expected_topics: vec!["billing".to_string()],
            generate_suggestions: false,
            ..AnalysisRequest::default()
        };

        let report = orchestrator.run_full_analysis(&request).await.unwrap();

        assert_eq!(stub.requests().len(), 1);
        assert_eq!(report.coverage_score, 0.0);
        assert_eq!(report.faqs_generated, 0);
    }

    #[tokio::test]
    async fn test_late_stage_failure_aborts_run() {
        // No suggestion reply scripted: the suggestions stage fails upstream
        let stub = StubCompletionService::new()
            .reply(GAP_ANALYSIS_CONTRACT, gaps_reply(vec![gap_json("A", "high")]))
            .shared();
        let orchestrator = KnowledgeGapOrchestrator::new(stub);

        let err = orchestrator
            .run_full_analysis(&AnalysisRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::StageFailed {
                stage: Stage::Suggestions,
                source: AnalyzerError::Upstream(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_invalid_score_fails_detect_stage() {
        let mut gap = gap_json("A", "high");
        gap["impact_score"] = json!(1.5);
        let stub = StubCompletionService::new()
            .reply(GAP_ANALYSIS_CONTRACT, gaps_reply(vec![gap]))
            .shared();

        let err = KnowledgeGapOrchestrator::new(stub)
            .run_full_analysis(&AnalysisRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::StageFailed {
                stage: Stage::Detect,
                source: AnalyzerError::StructuredOutput(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_narrow_entrypoints() {
        let stub = StubCompletionService::new()
            .reply(GAP_ANALYSIS_CONTRACT, gaps_reply(vec![gap_json("A", "critical")]))
            .reply(FAQ_SET_CONTRACT, faq_reply(1))
            .shared();
        let orchestrator = KnowledgeGapOrchestrator::new(stub.clone());

        let gaps = orchestrator
            .detect_gaps_only(&[SearchQuery::from("x")], &[], &[])
            .await
            .unwrap();
        assert_eq!(gaps.gaps[0].priority, GapPriority::Critical);
        assert_eq!(gaps.total_queries_analyzed, 1);

        let faqs = orchestrator
            .generate_faqs_only(&[SupportTicket::default()], &[SearchQuery::from("x")])
            .await
            .unwrap();
        assert_eq!(faqs.total_sources_analyzed, 2);
        assert_eq!(stub.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_bulk_quality_caps_items_and_averages() {
        let mut stub = StubCompletionService::new();
        for overall in [0.2, 0.4] {
            stub = stub.reply(
                QUALITY_CONTRACT,
                json!({
                    "completeness_score": 0.5,
                    "clarity_score": 0.5,
                    "accuracy_score": 0.5,
                    "freshness_score": 0.5,
                    "overall_score": overall
                }),
            );
        }
        let stub = stub.shared();
        let orchestrator = KnowledgeGapOrchestrator::new(stub.clone());
        let items: Vec<ContentRecord> = (0..25).map(|i| content(&format!("Doc {i}"))).collect();

        let result = orchestrator.analyze_content_quality(&items).await.unwrap();

        assert_eq!(result.quality_assessments.len(), 20);
        assert_eq!(stub.requests().len(), 20);
        assert_eq!(result.quality_assessments[0].content_id, "doc-0");
        // 0.2 once, then 0.4 repeated for the remaining 19
        let mean = (0.2 + 0.4 * 19.0) / 20.0;
        assert_eq!(
            result.summary,
            format!("Analyzed 20 pieces of content. Average quality score: {mean:.2}")
        );
    }

    #[tokio::test]
    async fn test_bulk_quality_with_no_content() {
        let stub = StubCompletionService::new().shared();
        let result = KnowledgeGapOrchestrator::new(stub)
            .analyze_content_quality(&[])
            .await
            .unwrap();
        assert!(result.quality_assessments.is_empty());
        assert_eq!(result.summary, "No content provided for quality analysis.");
    }

    #[test]
    fn test_summary_order() {
        let mut report = AnalysisReport::start();
        report.duration_seconds = 2.34;
        report.coverage_score = 0.0;
        let ran = StagesRun {
            coverage: true,
            faqs: true,
            suggestions: true,
        };
        assert_eq!(
            compose_summary(&report, &ran),
            "Analysis completed in 2.3 seconds. Identified 0 knowledge gaps. Generated 0 FAQs. \
             Created 0 content suggestions. Current coverage: 0.0%."
        );
    }
}
