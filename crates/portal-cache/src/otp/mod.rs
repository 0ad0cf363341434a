//! One-time code storage module.

mod otp_store;

pub use otp_store::{OtpOutcome, OtpStore};
