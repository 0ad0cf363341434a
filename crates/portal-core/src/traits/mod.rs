//! Repository traits (ports)

pub mod repositories;

pub use repositories::{
    AppLinkRepository, CompanySettingsRepository, ContactRepository, ContentFilter,
    ExecutiveMessageRepository, ItTipRepository, NewsRepository, Page, PushSubscriptionRepository,
    RefreshTokenRepository, RepoResult, SuggestionRepository, ToolboxTalkRepository,
    UserRepository,
};
