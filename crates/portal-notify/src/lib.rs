//! # portal-notify
//!
//! Outbound delivery layer: Web Push notifications (RFC 8030, VAPID
//! authentication per RFC 8292) and SMS dispatch for one-time codes.
//!
//! Both channels sit behind injectable traits ([`push::PushSender`],
//! [`sms::SmsSender`]) so the application layer receives a capability at
//! construction time rather than reaching for global state, and tests can
//! substitute in-memory fakes.

pub mod push;
pub mod sms;

pub use push::{
    DeliveryReport, NotificationPayload, PushBroadcaster, PushSendError, PushSender,
    WebPushSender,
};
pub use sms::{HttpSmsClient, LoggingSmsSender, SmsDelivery, SmsError, SmsSender};
