//! Web Push delivery module.

mod broadcaster;
mod payload;
mod sender;

pub use broadcaster::{DeliveryReport, PushBroadcaster};
pub use payload::NotificationPayload;
pub use sender::{PushSendError, PushSender, WebPushSender};
