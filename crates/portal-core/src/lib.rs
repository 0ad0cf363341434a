//! # portal-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AppLink, CompanySettings, Contact, ExecutiveMessage, ItTip, NewsArticle, PortalUser,
    PushSubscription, RefreshToken, Suggestion, SuggestionStatus, ToolboxTalk,
};
pub use error::DomainError;
pub use traits::{
    AppLinkRepository, CompanySettingsRepository, ContactRepository, ContentFilter,
    ExecutiveMessageRepository, ItTipRepository, NewsRepository, Page, PushSubscriptionRepository,
    RefreshTokenRepository, RepoResult, SuggestionRepository, ToolboxTalkRepository,
    UserRepository,
};
pub use value_objects::{normalize_phone, PhoneNumber, UserRole};
