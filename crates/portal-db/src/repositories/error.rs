//! Error handling utilities for repositories

use portal_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Uuid) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create an "article not found" error
pub fn article_not_found(id: Uuid) -> DomainError {
    DomainError::ArticleNotFound(id)
}

/// Create a "toolbox talk not found" error
pub fn toolbox_talk_not_found(id: Uuid) -> DomainError {
    DomainError::ToolboxTalkNotFound(id)
}

/// Create a "suggestion not found" error
pub fn suggestion_not_found(id: Uuid) -> DomainError {
    DomainError::SuggestionNotFound(id)
}

/// Create a "contact not found" error
pub fn contact_not_found(id: Uuid) -> DomainError {
    DomainError::ContactNotFound(id)
}

/// Create an "app link not found" error
pub fn app_link_not_found(id: Uuid) -> DomainError {
    DomainError::AppLinkNotFound(id)
}

/// Create an "IT tip not found" error
pub fn it_tip_not_found(id: Uuid) -> DomainError {
    DomainError::ItTipNotFound(id)
}

/// Create an "executive message not found" error
pub fn executive_message_not_found(id: Uuid) -> DomainError {
    DomainError::ExecutiveMessageNotFound(id)
}
