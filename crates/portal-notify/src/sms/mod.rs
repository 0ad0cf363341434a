//! SMS dispatch module.

mod client;

pub use client::{HttpSmsClient, LoggingSmsSender, SmsDelivery, SmsError, SmsSender};
