//! Raw source records supplied by callers
//!
//! Records arrive from heterogeneous collectors (search analytics, helpdesk
//! exports, CMS dumps), so every shape deserializes leniently: bare strings
//! are accepted where a mapping would normally carry a single text field, and
//! missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_count() -> u64 {
    1
}

/// A search query, typically one that returned zero or poor results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "SearchQueryInput")]
pub struct SearchQuery {
    pub query: String,
    /// How many times the query was issued
    pub count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchQueryInput {
    Text(String),
    Entry {
        query: String,
        #[serde(default = "default_count")]
        count: u64,
    },
}

impl From<SearchQueryInput> for SearchQuery {
    fn from(input: SearchQueryInput) -> Self {
        match input {
            SearchQueryInput::Text(query) => Self { query, count: 1 },
            SearchQueryInput::Entry { query, count } => Self { query, count },
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self {
            query: query.to_string(),
            count: 1,
        }
    }
}

/// A support ticket exported from the helpdesk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SupportTicket {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub resolution: Option<String>,
    pub category: Option<String>,
}

/// Free-text user feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "UserFeedbackInput")]
pub struct UserFeedback {
    pub feedback: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserFeedbackInput {
    Text(String),
    Entry { feedback: String },
}

impl From<UserFeedbackInput> for UserFeedback {
    fn from(input: UserFeedbackInput) -> Self {
        match input {
            UserFeedbackInput::Text(feedback) | UserFeedbackInput::Entry { feedback } => {
                Self { feedback }
            }
        }
    }
}

impl From<&str> for UserFeedback {
    fn from(feedback: &str) -> Self {
        Self {
            feedback: feedback.to_string(),
        }
    }
}

/// An existing piece of documentation or knowledge base content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContentRecord {
    pub id: String,
    pub title: Option<String>,
    pub content: String,
    pub last_updated: Option<String>,
    pub category: Option<String>,
}

impl ContentRecord {
    /// Title as shown to the model and echoed back into results
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}
