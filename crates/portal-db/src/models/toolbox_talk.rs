//! Toolbox talk database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for toolbox_talks table
#[derive(Debug, Clone, FromRow)]
pub struct ToolboxTalkModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub topic: Option<String>,
    pub week_of: NaiveDate,
    pub attachment_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
