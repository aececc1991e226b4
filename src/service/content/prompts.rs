//! Prompts for content quality, coverage and suggestions

use crate::model::ContentRecord;
use crate::service::shaping::{
    SourceShape, render_content_overview, render_titles, render_topics, truncate_chars,
};

/// System prompt for single-item quality assessment
pub const QUALITY_SYSTEM_PROMPT: &str = r#"You are a content quality analyst. Evaluate the given content on:

1. **Completeness**: Does it cover the topic thoroughly?
2. **Clarity**: Is it easy to understand?
3. **Accuracy**: Is the information correct and current?
4. **Freshness**: Is it up-to-date?

Score each dimension between 0 and 1, give an overall score between 0 and 1,
and identify specific issues and improvements."#;

/// System prompt for coverage analysis
pub const COVERAGE_SYSTEM_PROMPT: &str = r#"You are a content coverage analyst. Compare existing content
against expected topics to identify gaps.

For each expected topic, determine if it is:
- Well covered: Comprehensive content exists
- Partially covered: Some content but incomplete
- Not covered: No content addresses this topic

total_topics is the number of expected topics and covered_topics the number
that are well or partially covered.

Provide actionable recommendations for improving coverage."#;

/// System prompt for content suggestions
pub const SUGGESTION_SYSTEM_PROMPT: &str = r#"You are a content strategist. Create a detailed content
suggestion to address a knowledge gap.

Provide:
1. A compelling title
2. A summary of what to cover
3. A detailed outline with sections
4. Priority and effort assessment
5. SEO keywords to target
6. Related content to link to"#;

const QUALITY_BODY_CHARS: usize = 3000;
const COVERAGE_CONTENT: SourceShape = SourceShape::lines(30, "No existing content").with_chars(200);
const EXPECTED_TOPICS: SourceShape = SourceShape::lines(usize::MAX, "No expected topics provided");
const RELATED_TITLES: SourceShape = SourceShape::lines(10, "No related content");

/// Build the quality prompt for one content record
pub fn build_quality_prompt(content: &ContentRecord) -> String {
    format!(
        r#"Analyze this content:

Title: {title}
Content: {body}
Last Updated: {last_updated}
Category: {category}

Provide a quality assessment."#,
        title = content.display_title(),
        body = truncate_chars(&content.content, QUALITY_BODY_CHARS),
        last_updated = content.last_updated.as_deref().unwrap_or("Unknown"),
        category = content.category.as_deref().unwrap_or("Unknown"),
    )
}

/// Build the coverage prompt
pub fn build_coverage_prompt(content_list: &[ContentRecord], expected_topics: &[String]) -> String {
    format!(
        r#"Analyze coverage:

## Existing Content
{existing}

## Expected Topics to Cover
{topics}

Provide a coverage analysis."#,
        existing = render_content_overview(content_list, COVERAGE_CONTENT),
        topics = render_topics(expected_topics, EXPECTED_TOPICS),
    )
}

/// Build the suggestion prompt for one gap
pub fn build_suggestion_prompt(
    gap_title: &str,
    gap_description: &str,
    existing_titles: &[String],
) -> String {
    format!(
        r#"Create a content suggestion for this gap:

Gap Title: {gap_title}
Gap Description: {gap_description}

Existing Related Content:
{existing}

Provide a comprehensive content suggestion."#,
        existing = render_titles(existing_titles, RELATED_TITLES),
    )
}
