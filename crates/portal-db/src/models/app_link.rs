//! App link database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for app_links table
#[derive(Debug, Clone, FromRow)]
pub struct AppLinkModel {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
