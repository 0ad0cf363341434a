//! Executive message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for executive_messages table
#[derive(Debug, Clone, FromRow)]
pub struct ExecutiveMessageModel {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub executive_name: String,
    pub executive_title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
