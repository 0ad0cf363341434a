//! Suggestion database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for suggestions table
#[derive(Debug, Clone, FromRow)]
pub struct SuggestionModel {
    pub id: Uuid,
    pub subject: String,
    pub body: String,
    pub is_anonymous: bool,
    pub submitted_by: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
