//! Push subscription database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for push_subscriptions table
///
/// `endpoint` is the primary key; the surrogate row id exists only for
/// admin tooling.
#[derive(Debug, Clone, FromRow)]
pub struct PushSubscriptionModel {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
