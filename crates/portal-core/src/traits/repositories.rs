//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    AppLink, CompanySettings, Contact, ExecutiveMessage, ItTip, NewsArticle, PortalUser,
    PushSubscription, RefreshToken, Suggestion, SuggestionStatus, ToolboxTalk,
};
use crate::error::DomainError;
use crate::value_objects::PhoneNumber;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Query helpers
// ============================================================================

/// Offset pagination for list queries (1-based page index)
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
}

impl Page {
    /// Create a page request, clamping the index to at least 1
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page,
        }
    }

    /// Row offset of the first item on this page
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Row limit for this page
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// Filter shared by the published-content collections
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    /// Restrict to published items (reader-facing lists)
    pub published_only: bool,
    /// Restrict to a category/topic
    pub category: Option<String>,
}

impl ContentFilter {
    /// Filter for reader-facing listings
    pub fn published() -> Self {
        Self {
            published_only: true,
            category: None,
        }
    }

    /// Restrict the filter to a category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<PortalUser>>;

    /// Find user by canonical phone number
    async fn find_by_phone(&self, phone: &PhoneNumber) -> RepoResult<Option<PortalUser>>;

    /// Check if a canonical phone number is already registered
    async fn phone_exists(&self, phone: &PhoneNumber) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &PortalUser) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &PortalUser) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a newly issued token
    async fn create(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Find an active (non-revoked, non-expired) token by its digest
    async fn find_active_by_hash(&self, token_hash: &str) -> RepoResult<Option<RefreshToken>>;

    /// Revoke the token with this digest iff it is still active.
    ///
    /// Returns `true` when this call performed the revocation. A concurrent
    /// caller racing on the same digest sees `false` and must treat the
    /// token as unknown - this is the fail-closed guard for rotation.
    async fn revoke_active_by_hash(&self, token_hash: &str) -> RepoResult<bool>;

    /// Revoke every active token belonging to a user (logout everywhere)
    async fn revoke_all_for_user(&self, user_id: Uuid) -> RepoResult<u64>;

    /// Physically delete tokens expired for longer than the grace window
    async fn delete_expired(&self, grace_seconds: i64) -> RepoResult<u64>;
}

// ============================================================================
// Push Subscription Repository
// ============================================================================

#[async_trait]
pub trait PushSubscriptionRepository: Send + Sync {
    /// Upsert a subscription keyed by endpoint; repeated saves for the same
    /// endpoint replace the stored keys
    async fn save(&self, subscription: &PushSubscription) -> RepoResult<()>;

    /// Delete by endpoint; returns whether a row existed (absent is not an error)
    async fn remove(&self, endpoint: &str) -> RepoResult<bool>;

    /// Delete a batch of endpoints, returning the number removed
    async fn remove_many(&self, endpoints: &[String]) -> RepoResult<u64>;

    /// Load every stored subscription for fan-out
    async fn find_all(&self) -> RepoResult<Vec<PushSubscription>>;

    /// Count stored subscriptions
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Content Repositories
// ============================================================================

#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<NewsArticle>>;

    /// List newest-first, honoring the filter
    async fn list(&self, filter: &ContentFilter, page: Page) -> RepoResult<Vec<NewsArticle>>;

    /// Total rows matching the filter
    async fn count(&self, filter: &ContentFilter) -> RepoResult<i64>;

    async fn create(&self, article: &NewsArticle) -> RepoResult<()>;

    async fn update(&self, article: &NewsArticle) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait ToolboxTalkRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ToolboxTalk>>;

    /// List by scheduled week, newest week first
    async fn list(&self, filter: &ContentFilter, page: Page) -> RepoResult<Vec<ToolboxTalk>>;

    async fn count(&self, filter: &ContentFilter) -> RepoResult<i64>;

    async fn create(&self, talk: &ToolboxTalk) -> RepoResult<()>;

    async fn update(&self, talk: &ToolboxTalk) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Suggestion>>;

    /// List newest-first, optionally restricted to a review status
    async fn list(&self, status: Option<SuggestionStatus>, page: Page)
        -> RepoResult<Vec<Suggestion>>;

    async fn count(&self, status: Option<SuggestionStatus>) -> RepoResult<i64>;

    async fn create(&self, suggestion: &Suggestion) -> RepoResult<()>;

    /// Move a suggestion through its review workflow
    async fn update_status(&self, id: Uuid, status: SuggestionStatus) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Contact>>;

    /// List ordered by sort order then name, optionally by department
    async fn list(&self, department: Option<&str>, page: Page) -> RepoResult<Vec<Contact>>;

    async fn count(&self, department: Option<&str>) -> RepoResult<i64>;

    async fn create(&self, contact: &Contact) -> RepoResult<()>;

    async fn update(&self, contact: &Contact) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait AppLinkRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<AppLink>>;

    /// List every launcher tile in display order
    async fn list(&self) -> RepoResult<Vec<AppLink>>;

    async fn create(&self, link: &AppLink) -> RepoResult<()>;

    async fn update(&self, link: &AppLink) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait ItTipRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ItTip>>;

    async fn list(&self, filter: &ContentFilter, page: Page) -> RepoResult<Vec<ItTip>>;

    async fn count(&self, filter: &ContentFilter) -> RepoResult<i64>;

    async fn create(&self, tip: &ItTip) -> RepoResult<()>;

    async fn update(&self, tip: &ItTip) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait ExecutiveMessageRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ExecutiveMessage>>;

    /// List newest-first; `active_only` for the reader-facing view
    async fn list(&self, active_only: bool, page: Page) -> RepoResult<Vec<ExecutiveMessage>>;

    async fn count(&self, active_only: bool) -> RepoResult<i64>;

    async fn create(&self, message: &ExecutiveMessage) -> RepoResult<()>;

    async fn update(&self, message: &ExecutiveMessage) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait CompanySettingsRepository: Send + Sync {
    /// Read the settings row, or defaults when nothing has been saved
    async fn get(&self) -> RepoResult<CompanySettings>;

    /// Replace the settings row
    async fn save(&self, settings: &CompanySettings) -> RepoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        let page = Page::new(1, 20);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 20);

        let page = Page::new(3, 25);
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn test_page_clamps_zero_index() {
        let page = Page::new(0, 20);
        assert_eq!(page.page, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_content_filter_builder() {
        let filter = ContentFilter::published().with_category("safety");
        assert!(filter.published_only);
        assert_eq!(filter.category.as_deref(), Some("safety"));
    }
}
