//! SMS delivery clients
//!
//! [`HttpSmsClient`] posts a plain-text message to the provider's HTTP API
//! with API-key authentication. The provider's "sender ID not registered"
//! rejection is surfaced as its own error variant so operators get alerted
//! instead of the end user seeing a generic failure.
//!
//! [`LoggingSmsSender`] is the deliberate dev fallback used when no
//! credentials are configured: the message is logged, and the operation
//! still succeeds so local login flows keep working.

use async_trait::async_trait;
use portal_common::SmsConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

/// Provider response code for a sender ID that has not been registered
/// (or approved) with the gateway.
const CODE_SENDER_NOT_REGISTERED: &str = "109";

/// How a message left the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsDelivery {
    /// Accepted by the SMS gateway
    Sent,
    /// Written to the log instead (no credentials configured)
    Logged,
}

/// SMS delivery errors
#[derive(Debug, Error)]
pub enum SmsError {
    /// The configured sender ID is not registered with the provider.
    /// Operator-facing: retrying with the same configuration cannot succeed.
    #[error("SMS sender ID is not registered with the provider")]
    SenderNotRegistered,

    /// The provider rejected the message for some other reason
    #[error("SMS provider rejected message: {0}")]
    Provider(String),

    /// The HTTP request itself failed
    #[error("SMS transport error: {0}")]
    Transport(String),
}

/// Capability to deliver one SMS message
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send `message` to a canonical phone number
    async fn send(&self, to: &str, message: &str) -> Result<SmsDelivery, SmsError>;
}

#[derive(Debug, Serialize)]
struct SmsRequest<'a> {
    sender: &'a str,
    recipient: &'a str,
    message: &'a str,
    #[serde(rename = "type")]
    message_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct SmsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Production SMS client posting to the provider's HTTP API
pub struct HttpSmsClient {
    client: reqwest::Client,
    config: SmsConfig,
}

impl HttpSmsClient {
    /// Create a client from provider credentials loaded at startup
    #[must_use]
    pub fn new(config: SmsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SmsSender for HttpSmsClient {
    #[instrument(skip(self, message))]
    async fn send(&self, to: &str, message: &str) -> Result<SmsDelivery, SmsError> {
        let url = format!("{}/sms/send", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.config.api_key)
            .json(&SmsRequest {
                sender: &self.config.sender_id,
                recipient: to,
                message,
                message_type: "plain",
            })
            .send()
            .await
            .map_err(|e| SmsError::Transport(e.to_string()))?;

        let status = response.status();
        let body: SmsResponse = response
            .json()
            .await
            .map_err(|e| SmsError::Transport(e.to_string()))?;

        if body.code.as_deref() == Some(CODE_SENDER_NOT_REGISTERED) {
            return Err(SmsError::SenderNotRegistered);
        }

        if !status.is_success() || body.status.as_deref() != Some("success") {
            return Err(SmsError::Provider(
                body.message
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            ));
        }

        Ok(SmsDelivery::Sent)
    }
}

impl std::fmt::Debug for HttpSmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSmsClient")
            .field("sender_id", &self.config.sender_id)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

/// Fallback sender used when no SMS credentials are configured.
///
/// Logs the message instead of sending it so development and staging login
/// flows still work. Never fails.
#[derive(Debug, Clone, Default)]
pub struct LoggingSmsSender;

#[async_trait]
impl SmsSender for LoggingSmsSender {
    async fn send(&self, to: &str, message: &str) -> Result<SmsDelivery, SmsError> {
        info!(to = %to, message = %message, "SMS not configured, logging message instead");
        Ok(SmsDelivery::Logged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_sender_always_succeeds() {
        let sender = LoggingSmsSender;
        let outcome = sender.send("233244123456", "Your code is 123456").await;
        assert!(matches!(outcome, Ok(SmsDelivery::Logged)));
    }

    #[test]
    fn test_sender_not_registered_is_distinct() {
        let err = SmsError::SenderNotRegistered;
        assert!(matches!(err, SmsError::SenderNotRegistered));
        assert!(err.to_string().contains("sender ID"));
    }

    #[test]
    fn test_request_serialization() {
        let request = SmsRequest {
            sender: "COMPANY",
            recipient: "233244123456",
            message: "Your code is 123456",
            message_type: "plain",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sender"], "COMPANY");
        assert_eq!(json["type"], "plain");
    }
}
