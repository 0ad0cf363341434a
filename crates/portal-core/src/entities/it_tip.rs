//! IT tip entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A short IT self-help tip shown on the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItTip {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItTip {
    /// Create a new unpublished tip
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }
}
