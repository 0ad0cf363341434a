//! App link entity - a tile on the portal's application launcher

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A link to an internal or external company application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLink {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AppLink {
    /// Create a new launcher tile
    pub fn new(name: String, url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            url,
            description: None,
            icon_url: None,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
