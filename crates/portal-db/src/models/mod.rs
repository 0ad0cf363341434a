//! Database models - SQLx-compatible structs for PostgreSQL tables

mod app_link;
mod company_settings;
mod contact;
mod executive_message;
mod it_tip;
mod news;
mod push_subscription;
mod refresh_token;
mod suggestion;
mod toolbox_talk;
mod user;

pub use app_link::AppLinkModel;
pub use company_settings::CompanySettingsModel;
pub use contact::ContactModel;
pub use executive_message::ExecutiveMessageModel;
pub use it_tip::ItTipModel;
pub use news::NewsArticleModel;
pub use push_subscription::PushSubscriptionModel;
pub use refresh_token::RefreshTokenModel;
pub use suggestion::SuggestionModel;
pub use toolbox_talk::ToolboxTalkModel;
pub use user::UserModel;
