//! News article database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for news_articles table
#[derive(Debug, Clone, FromRow)]
pub struct NewsArticleModel {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author_id: Option<Uuid>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
