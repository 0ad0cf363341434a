//! Domain entities

pub mod app_link;
pub mod company_settings;
pub mod contact;
pub mod executive_message;
pub mod it_tip;
pub mod news;
pub mod push_subscription;
pub mod refresh_token;
pub mod suggestion;
pub mod toolbox_talk;
pub mod user;

pub use app_link::AppLink;
pub use company_settings::CompanySettings;
pub use contact::Contact;
pub use executive_message::ExecutiveMessage;
pub use it_tip::ItTip;
pub use news::NewsArticle;
pub use push_subscription::PushSubscription;
pub use refresh_token::RefreshToken;
pub use suggestion::{Suggestion, SuggestionStatus};
pub use toolbox_talk::ToolboxTalk;
pub use user::PortalUser;
