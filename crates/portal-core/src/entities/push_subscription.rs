//! Push subscription entity - one browser push channel

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored Web Push subscription.
///
/// The `endpoint` URL is the unique key: subscribing again from the same
/// browser replaces the stored keys rather than adding a second row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSubscription {
    /// Unique push endpoint URL issued by the browser's push service
    pub endpoint: String,
    /// Client public key (P-256 ECDH)
    pub p256dh: String,
    /// Client auth secret
    pub auth: String,
    /// Owning user, when the subscriber was logged in
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl PushSubscription {
    /// Create a new subscription record
    pub fn new(endpoint: impl Into<String>, p256dh: impl Into<String>, auth: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            p256dh: p256dh.into(),
            auth: auth.into(),
            user_id: None,
            created_at: Utc::now(),
        }
    }

    /// Associate the subscription with a user
    #[must_use]
    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }
}
