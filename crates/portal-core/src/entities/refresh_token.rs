//! Refresh token entity
//!
//! One row per device chain. The raw token value never appears here; only
//! its SHA-256 digest is persisted.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// A long-lived, rotating session credential.
///
/// Lifecycle: active → revoked (logout or rotation) or active → expired
/// (time). Each device holds an independent chain; revoking one chain never
/// touches another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub id: Uuid,
    pub user_id: Uuid,
    /// SHA-256 digest (hex) of the opaque token handed to the client
    pub token_hash: String,
    pub device_info: Option<String>,
    pub ip_address: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Create a new active token for a user
    pub fn new(user_id: Uuid, token_hash: String, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            device_info: None,
            ip_address: None,
            expires_at: now + Duration::seconds(ttl_seconds),
            created_at: now,
            revoked_at: None,
        }
    }

    /// Attach device metadata
    #[must_use]
    pub fn with_device_info(mut self, device: impl Into<String>) -> Self {
        self.device_info = Some(device.into());
        self
    }

    /// Attach the client IP seen at issuance
    #[must_use]
    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    /// Check if token has been revoked
    #[inline]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Check if token is past its expiry
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Check if token is usable (not revoked and not expired)
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_active() {
        let token = RefreshToken::new(Uuid::new_v4(), "digest".to_string(), 3600);
        assert!(token.is_active());
        assert!(!token.is_revoked());
        assert!(!token.is_expired());
    }

    #[test]
    fn test_expired_token_is_not_active() {
        let token = RefreshToken::new(Uuid::new_v4(), "digest".to_string(), -1);
        assert!(token.is_expired());
        assert!(!token.is_active());
    }

    #[test]
    fn test_revoked_token_is_not_active() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "digest".to_string(), 3600);
        token.revoked_at = Some(Utc::now());
        assert!(token.is_revoked());
        assert!(!token.is_active());
    }

    #[test]
    fn test_device_metadata_builders() {
        let token = RefreshToken::new(Uuid::new_v4(), "digest".to_string(), 3600)
            .with_device_info("Chrome on Windows")
            .with_ip_address("10.1.2.3");

        assert_eq!(token.device_info.as_deref(), Some("Chrome on Windows"));
        assert_eq!(token.ip_address.as_deref(), Some("10.1.2.3"));
    }
}
