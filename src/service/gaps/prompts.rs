//! Prompts for knowledge gap detection

use crate::model::{SearchQuery, SupportTicket, UserFeedback};
use crate::service::shaping::{
    QueryFrequency, SourceShape, render_feedback, render_queries, render_ticket_evidence,
    render_titles,
};

/// System prompt for gap detection
pub const GAP_DETECTION_SYSTEM_PROMPT: &str = r#"You are an expert knowledge base analyst specializing in identifying
gaps in documentation and support content.

Your job is to analyze:
1. Search queries with zero or poor results
2. Support tickets about topics not covered in documentation
3. User feedback indicating missing information
4. Content that exists but is incomplete or outdated

For each gap you identify:
- Provide a clear, actionable title
- Explain what information is missing
- Assess priority (critical, high, medium, low) based on frequency and user impact
- Give an impact score between 0 and 1
- Suggest what content should be created

Prioritize gaps that:
- Affect many users (high query/ticket volume)
- Block critical user workflows
- Relate to core product features
- Have easy-to-create solutions

Existing content is listed for reference only: do not report a gap for a topic
it already covers."#;

const QUERIES: SourceShape = SourceShape::lines(50, "No search data available");
const TICKETS: SourceShape = SourceShape::blocks(30, 200, "No ticket data available");
const FEEDBACK: SourceShape = SourceShape::lines(20, "No feedback data available");
const EXISTING_TITLES: SourceShape = SourceShape::lines(20, "No existing content");

const CATEGORIZED_TICKETS: SourceShape = SourceShape::blocks(30, 300, "No ticket data available");
const EXISTING_TITLES_PROVIDED: SourceShape =
    SourceShape::lines(20, "No existing content provided");

const NO_SEARCH_DATA: &str = "No search data provided";
const NO_TICKET_DATA: &str = "No ticket data provided";
const NO_FEEDBACK_DATA: &str = "No feedback data provided";

/// Build the prompt over every available source
pub fn build_detection_prompt(
    queries: &[SearchQuery],
    tickets: &[SupportTicket],
    feedback: &[UserFeedback],
    existing_titles: &[String],
) -> String {
    render_prompt(
        &render_queries(queries, QUERIES, QueryFrequency::Count),
        &render_ticket_evidence(tickets, TICKETS, false),
        &render_feedback(feedback, FEEDBACK),
        &render_titles(existing_titles, EXISTING_TITLES),
    )
}

/// Build the prompt over zero-result searches only
pub fn build_search_prompt(queries: &[SearchQuery], existing_titles: &[String]) -> String {
    render_prompt(
        &render_queries(queries, QUERIES, QueryFrequency::Count),
        NO_TICKET_DATA,
        NO_FEEDBACK_DATA,
        &render_titles(existing_titles, EXISTING_TITLES_PROVIDED),
    )
}

/// Build the prompt over support tickets only
pub fn build_ticket_prompt(tickets: &[SupportTicket], existing_titles: &[String]) -> String {
    render_prompt(
        NO_SEARCH_DATA,
        &render_ticket_evidence(tickets, CATEGORIZED_TICKETS, true),
        NO_FEEDBACK_DATA,
        &render_titles(existing_titles, EXISTING_TITLES_PROVIDED),
    )
}

fn render_prompt(queries: &str, tickets: &str, feedback: &str, existing: &str) -> String {
    format!(
        r#"Analyze the following data to identify knowledge gaps:

## Zero-Result Search Queries
{queries}

## Support Tickets Without Documentation
{tickets}

## User Feedback
{feedback}

## Existing Content (for reference)
{existing}

Identify all knowledge gaps and prioritize them."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sources_become_placeholders() {
        let prompt = build_detection_prompt(&[], &[], &[], &[]);
        assert!(prompt.contains("## Zero-Result Search Queries\nNo search data available\n"));
        assert!(prompt.contains("No ticket data available"));
        assert!(prompt.contains("No feedback data available"));
        assert!(prompt.contains("## Existing Content (for reference)\nNo existing content\n"));
    }

    #[test]
    fn test_search_prompt_marks_other_sources_as_not_provided() {
        let prompt = build_search_prompt(&[SearchQuery::from("sso setup")], &[]);
        assert!(prompt.contains("- \"sso setup\" (count: 1)"));
        assert!(prompt.contains(NO_TICKET_DATA));
        assert!(prompt.contains(NO_FEEDBACK_DATA));
        assert!(prompt.contains("No existing content provided"));
    }

    #[test]
    fn test_ticket_prompt_includes_category() {
        let tickets = vec![SupportTicket {
            subject: Some("Cannot export".to_string()),
            description: Some("Export button greyed out".to_string()),
            category: Some("data".to_string()),
            resolution: None,
        }];
        let prompt = build_ticket_prompt(&tickets, &["Export guide".to_string()]);
        assert!(prompt.contains(
            "Ticket: Cannot export\nCategory: data\nDescription: Export button greyed out"
        ));
        assert!(prompt.contains(NO_SEARCH_DATA));
        assert!(prompt.contains("Export guide"));
    }

    #[test]
    fn test_existing_titles_capped_at_twenty() {
        let titles: Vec<String> = (0..25).map(|i| format!("Article {i:02}")).collect();
        let prompt = build_detection_prompt(&[], &[], &[], &titles);
        assert!(prompt.contains("Article 19"));
        assert!(!prompt.contains("Article 20"));
    }
}
