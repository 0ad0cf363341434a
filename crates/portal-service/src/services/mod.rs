//! Application services

mod app_link;
mod auth;
mod company;
mod contact;
mod context;
mod error;
mod executive_message;
mod it_tip;
mod news;
mod push;
mod suggestion;
mod toolbox_talk;
mod user;

pub use app_link::AppLinkService;
pub use auth::AuthService;
pub use company::CompanyService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use executive_message::ExecutiveMessageService;
pub use it_tip::ItTipService;
pub use news::NewsService;
pub use push::PushService;
pub use suggestion::SuggestionService;
pub use toolbox_talk::ToolboxTalkService;
pub use user::UserService;
