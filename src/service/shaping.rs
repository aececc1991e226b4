//! Input shaping
//!
//! Turns raw record lists into bounded text blocks that are safe to embed in
//! a prompt. Each call site declares its own [`SourceShape`]: only the first
//! `max_rows` records are kept (input order preserved), text fields are cut
//! to `max_chars` characters, and an empty source becomes a fixed
//! placeholder sentence. Shaping is pure and total.

use crate::model::{ContentRecord, SearchQuery, SupportTicket, UserFeedback};

/// Row, character and placeholder policy for one source at one call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceShape {
    pub max_rows: usize,
    pub max_chars: usize,
    pub separator: &'static str,
    pub placeholder: &'static str,
}

impl SourceShape {
    /// Line-per-row shape without a character cap
    pub const fn lines(max_rows: usize, placeholder: &'static str) -> Self {
        Self {
            max_rows,
            max_chars: usize::MAX,
            separator: "\n",
            placeholder,
        }
    }

    /// Multi-line blocks separated by a blank line
    pub const fn blocks(max_rows: usize, max_chars: usize, placeholder: &'static str) -> Self {
        Self {
            max_rows,
            max_chars,
            separator: "\n\n",
            placeholder,
        }
    }

    pub const fn with_chars(self, max_chars: usize) -> Self {
        Self { max_chars, ..self }
    }

    /// Render the first `max_rows` records, or the placeholder when there are none
    pub fn render<T>(&self, records: &[T], line: impl Fn(&T) -> String) -> String {
        if records.is_empty() {
            return self.placeholder.to_string();
        }
        records
            .iter()
            .take(self.max_rows)
            .map(line)
            .collect::<Vec<_>>()
            .join(self.separator)
    }

    /// Cut a text field to this shape's character cap
    pub fn clip<'a>(&self, text: &'a str) -> &'a str {
        truncate_chars(text, self.max_chars)
    }
}

/// Prefix of `text` holding at most `max` characters
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// How a query's frequency is phrased
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFrequency {
    /// `(count: n)`
    Count,
    /// `(asked n times)`
    Asked,
}

pub fn render_queries(queries: &[SearchQuery], shape: SourceShape, frequency: QueryFrequency) -> String {
    shape.render(queries, |q| match frequency {
        QueryFrequency::Count => format!("- \"{}\" (count: {})", shape.clip(&q.query), q.count),
        QueryFrequency::Asked => {
            format!("- \"{}\" (asked {} times)", shape.clip(&q.query), q.count)
        }
    })
}

/// Tickets as gap evidence: subject, optional category, clipped description
pub fn render_ticket_evidence(
    tickets: &[SupportTicket],
    shape: SourceShape,
    with_category: bool,
) -> String {
    shape.render(tickets, |t| {
        let subject = t.subject.as_deref().unwrap_or("No subject");
        let description = shape.clip(t.description.as_deref().unwrap_or(""));
        if with_category {
            let category = t.category.as_deref().unwrap_or("Unknown");
            format!("Ticket: {subject}\nCategory: {category}\nDescription: {description}")
        } else {
            format!("Ticket: {subject}\nDescription: {description}")
        }
    })
}

/// Tickets as FAQ source material: question and resolution both clipped
pub fn render_ticket_resolutions(tickets: &[SupportTicket], shape: SourceShape) -> String {
    shape.render(tickets, |t| {
        format!(
            "Subject: {}\nQuestion: {}\nResolution: {}",
            t.subject.as_deref().unwrap_or("No subject"),
            shape.clip(t.description.as_deref().unwrap_or("")),
            shape.clip(t.resolution.as_deref().unwrap_or("Not provided")),
        )
    })
}

pub fn render_feedback(feedback: &[UserFeedback], shape: SourceShape) -> String {
    shape.render(feedback, |f| format!("- {}", shape.clip(&f.feedback)))
}

/// Documentation as title plus clipped body
pub fn render_documents(documents: &[ContentRecord], shape: SourceShape) -> String {
    shape.render(documents, |d| {
        format!(
            "Title: {}\nContent: {}",
            d.display_title(),
            shape.clip(&d.content)
        )
    })
}

/// One-line overview per document, used for coverage comparison
pub fn render_content_overview(documents: &[ContentRecord], shape: SourceShape) -> String {
    shape.render(documents, |d| {
        format!("- {}: {}...", d.display_title(), shape.clip(&d.content))
    })
}

pub fn render_titles(titles: &[String], shape: SourceShape) -> String {
    shape.render(titles, |t| shape.clip(t).to_string())
}

pub fn render_topics(topics: &[String], shape: SourceShape) -> String {
    shape.render(topics, |t| format!("- {}", shape.clip(t)))
}
