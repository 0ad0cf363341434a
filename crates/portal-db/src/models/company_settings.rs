//! Company settings database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the single-row company_settings table
#[derive(Debug, Clone, FromRow)]
pub struct CompanySettingsModel {
    /// Always 1; enforced by a CHECK constraint so only one row can exist
    pub id: i32,
    pub about: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub maintenance_mode: bool,
    pub updated_at: Option<DateTime<Utc>>,
}
