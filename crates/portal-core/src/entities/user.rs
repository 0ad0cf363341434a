//! Portal user entity - a phone-authenticated staff identity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{PhoneNumber, UserRole};

/// A portal user, identified by a canonical phone number.
///
/// There is no password: identity is established by proving possession of
/// the phone via a one-time SMS code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalUser {
    pub id: Uuid,
    pub phone: PhoneNumber,
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub role: UserRole,
    pub phone_verified: bool,
    pub login_count: i64,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortalUser {
    /// Create a new unverified user for a phone number
    pub fn new(phone: PhoneNumber) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone,
            full_name: None,
            department: None,
            role: UserRole::default(),
            phone_verified: false,
            login_count: 0,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a successful login: mark the phone verified and bump counters
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.phone_verified = true;
        self.login_count += 1;
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Display name, falling back to the local phone form
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .unwrap_or_else(|| self.phone.local_format())
    }

    /// Check if this user can manage content and review suggestions
    #[inline]
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> PortalUser {
        PortalUser::new(PhoneNumber::parse("0244123456").unwrap())
    }

    #[test]
    fn test_new_user_is_unverified() {
        let user = test_user();
        assert!(!user.phone_verified);
        assert_eq!(user.login_count, 0);
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_record_login() {
        let mut user = test_user();
        user.record_login();
        user.record_login();

        assert!(user.phone_verified);
        assert_eq!(user.login_count, 2);
        assert!(user.last_login_at.is_some());
    }

    #[test]
    fn test_display_name_falls_back_to_local_phone() {
        let mut user = test_user();
        assert_eq!(user.display_name(), "0244123456");

        user.full_name = Some("Ama Mensah".to_string());
        assert_eq!(user.display_name(), "Ama Mensah");
    }
}
