//! Executive message entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A message from company leadership shown on the portal home page.
///
/// Only messages flagged active are shown to staff; deactivating keeps the
/// record for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutiveMessage {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub executive_name: String,
    pub executive_title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExecutiveMessage {
    /// Create a new active message
    pub fn new(title: String, body: String, executive_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            body,
            executive_name,
            executive_title: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
