//! Contact database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for contacts table
#[derive(Debug, Clone, FromRow)]
pub struct ContactModel {
    pub id: Uuid,
    pub full_name: String,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
