//! Contact entity - staff directory entry

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A staff directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub full_name: String,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Position in directory listings; lower sorts first
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new directory entry
    pub fn new(full_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            full_name,
            department: None,
            job_title: None,
            phone: None,
            email: None,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
