//! IT tip database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for it_tips table
#[derive(Debug, Clone, FromRow)]
pub struct ItTipModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
