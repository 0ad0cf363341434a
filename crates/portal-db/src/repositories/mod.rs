//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in portal-core.
//! Each repository handles database operations for a specific domain entity.

mod app_link;
mod company_settings;
mod contact;
mod error;
mod executive_message;
mod it_tip;
mod news;
mod push_subscription;
mod refresh_token;
mod suggestion;
mod toolbox_talk;
mod user;

pub use app_link::PgAppLinkRepository;
pub use company_settings::PgCompanySettingsRepository;
pub use contact::PgContactRepository;
pub use executive_message::PgExecutiveMessageRepository;
pub use it_tip::PgItTipRepository;
pub use news::PgNewsRepository;
pub use push_subscription::PgPushSubscriptionRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use suggestion::PgSuggestionRepository;
pub use toolbox_talk::PgToolboxTalkRepository;
pub use user::PgUserRepository;
