//! Toolbox talk entity - weekly safety content

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A safety "toolbox talk" scheduled for a given week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolboxTalk {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub topic: Option<String>,
    /// Monday of the week the talk is scheduled for
    pub week_of: NaiveDate,
    pub attachment_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ToolboxTalk {
    /// Create a new unpublished talk for a week
    pub fn new(title: String, content: String, week_of: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            topic: None,
            week_of,
            attachment_url: None,
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }
}
