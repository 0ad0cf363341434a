//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("News article not found: {0}")]
    ArticleNotFound(Uuid),

    #[error("Toolbox talk not found: {0}")]
    ToolboxTalkNotFound(Uuid),

    #[error("Suggestion not found: {0}")]
    SuggestionNotFound(Uuid),

    #[error("Contact not found: {0}")]
    ContactNotFound(Uuid),

    #[error("App link not found: {0}")]
    AppLinkNotFound(Uuid),

    #[error("IT tip not found: {0}")]
    ItTipNotFound(Uuid),

    #[error("Executive message not found: {0}")]
    ExecutiveMessageNotFound(Uuid),

    /// Covers unknown, revoked, and expired refresh tokens alike. The three
    /// cases are deliberately indistinguishable so a rejected session leaks
    /// nothing about why it was rejected.
    #[error("Session not found")]
    SessionNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Invalid one-time code")]
    InvalidOtpCode,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("Phone number not verified")]
    PhoneNotVerified,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Phone number already registered")]
    PhoneAlreadyRegistered,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ArticleNotFound(_) => "UNKNOWN_ARTICLE",
            Self::ToolboxTalkNotFound(_) => "UNKNOWN_TOOLBOX_TALK",
            Self::SuggestionNotFound(_) => "UNKNOWN_SUGGESTION",
            Self::ContactNotFound(_) => "UNKNOWN_CONTACT",
            Self::AppLinkNotFound(_) => "UNKNOWN_APP_LINK",
            Self::ItTipNotFound(_) => "UNKNOWN_IT_TIP",
            Self::ExecutiveMessageNotFound(_) => "UNKNOWN_EXECUTIVE_MESSAGE",
            Self::SessionNotFound => "UNKNOWN_SESSION",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPhoneNumber(_) => "INVALID_PHONE_NUMBER",
            Self::InvalidOtpCode => "INVALID_OTP_CODE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::PhoneNotVerified => "PHONE_NOT_VERIFIED",

            Self::PhoneAlreadyRegistered => "PHONE_ALREADY_REGISTERED",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ArticleNotFound(_)
                | Self::ToolboxTalkNotFound(_)
                | Self::SuggestionNotFound(_)
                | Self::ContactNotFound(_)
                | Self::AppLinkNotFound(_)
                | Self::ItTipNotFound(_)
                | Self::ExecutiveMessageNotFound(_)
                | Self::SessionNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidPhoneNumber(_)
                | Self::InvalidOtpCode
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingPermission(_) | Self::PhoneNotVerified)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::PhoneAlreadyRegistered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::MissingPermission("MANAGE_CONTENT".to_string());
        assert_eq!(err.code(), "MISSING_PERMISSIONS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::SessionNotFound.is_not_found());
        assert!(!DomainError::PhoneAlreadyRegistered.is_not_found());
    }

    #[test]
    fn test_stale_session_is_plain_not_found() {
        // Token rejection must not reveal whether the token was unknown,
        // revoked, or expired.
        let err = DomainError::SessionNotFound;
        assert!(err.is_not_found());
        assert!(!err.is_authorization());
        assert_eq!(err.to_string(), "Session not found");
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidPhoneNumber("abc".to_string()).is_validation());
        assert!(DomainError::InvalidOtpCode.is_validation());
        assert!(!DomainError::UserNotFound(Uuid::nil()).is_validation());
    }
}
