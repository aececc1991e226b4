//! Prompts for FAQ generation and revision

use crate::model::{ContentRecord, SearchQuery, SupportTicket};
use crate::service::shaping::{
    QueryFrequency, SourceShape, render_documents, render_queries, render_ticket_resolutions,
    render_titles,
};

/// System prompt for FAQ generation
pub const FAQ_GENERATION_SYSTEM_PROMPT: &str = r#"You are an expert FAQ writer who creates clear, helpful FAQ content
from support ticket data and common user questions.

Your FAQs should:
1. Use natural, user-friendly language in questions
2. Provide comprehensive but concise answers
3. Include step-by-step instructions where appropriate
4. Anticipate follow-up questions
5. Be accurate based on the source material

For each FAQ:
- Phrase questions as users would ask them
- Structure answers for easy scanning (bullets, numbered lists)
- Include relevant context and prerequisites
- Suggest related questions users might have

Assign confidence scores between 0 and 1 based on:
- Quality and consistency of source data
- How well the answer addresses the question
- Completeness of the information"#;

/// System prompt for revising a single FAQ
pub const FAQ_REVISION_SYSTEM_PROMPT: &str = r#"You are an expert FAQ editor. Improve the given FAQ based on feedback.

Make the answer:
- More clear and concise
- More comprehensive where needed
- Better structured for readability
- More accurate based on feedback

Keep the question's intent unchanged. Assign a confidence score between 0 and 1."#;

const TICKETS: SourceShape = SourceShape::blocks(30, 250, "No ticket data available");
const QUERIES: SourceShape = SourceShape::lines(40, "No query data available");
const DOCUMENTATION: SourceShape = SourceShape::blocks(10, 400, "No existing documentation");

const TICKETS_ONLY_TICKETS: SourceShape = SourceShape::blocks(40, 300, "No ticket data available");
const TICKETS_ONLY_DOC_TITLES: SourceShape = SourceShape::lines(10, "No existing documentation");

const QUERIES_ONLY_QUERIES: SourceShape = SourceShape::lines(50, "No query data available");
const QUERIES_ONLY_DOCUMENTATION: SourceShape =
    SourceShape::blocks(10, 500, "No existing documentation");

const FEEDBACK: SourceShape = SourceShape::lines(usize::MAX, "No specific feedback");

const NO_TICKET_DATA: &str = "No ticket data provided";
const NO_QUERY_DATA: &str = "No query data provided";

/// Build the prompt over tickets, queries and documentation
pub fn build_generation_prompt(
    tickets: &[SupportTicket],
    queries: &[SearchQuery],
    documentation: &[ContentRecord],
) -> String {
    render_prompt(
        &render_ticket_resolutions(tickets, TICKETS),
        &render_queries(queries, QUERIES, QueryFrequency::Count),
        &render_documents(documentation, DOCUMENTATION),
    )
}

/// Build the prompt over tickets, with documentation referenced by title
pub fn build_ticket_prompt(tickets: &[SupportTicket], existing_titles: &[String]) -> String {
    render_prompt(
        &render_ticket_resolutions(tickets, TICKETS_ONLY_TICKETS),
        NO_QUERY_DATA,
        &render_titles(existing_titles, TICKETS_ONLY_DOC_TITLES),
    )
}

/// Build the prompt over common search queries
pub fn build_query_prompt(queries: &[SearchQuery], documentation: &[ContentRecord]) -> String {
    render_prompt(
        NO_TICKET_DATA,
        &render_queries(queries, QUERIES_ONLY_QUERIES, QueryFrequency::Asked),
        &render_documents(documentation, QUERIES_ONLY_DOCUMENTATION),
    )
}

fn render_prompt(tickets: &str, queries: &str, documentation: &str) -> String {
    format!(
        r#"Generate FAQs from the following support data:

## Support Tickets
{tickets}

## Common Search Queries
{queries}

## Existing Documentation (for reference)
{documentation}

Generate high-quality FAQs that address the most common user needs."#
    )
}

/// Build the revision prompt for one FAQ
pub fn build_revision_prompt(question: &str, current_answer: &str, feedback: &[String]) -> String {
    let feedback = FEEDBACK.render(feedback, |f| f.clone());
    format!(
        r#"Improve this FAQ:

Question: {question}
Current Answer: {current_answer}

Feedback:
{feedback}

Provide an improved version."#
    )
}
