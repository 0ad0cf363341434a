//! Push delivery capability
//!
//! [`WebPushSender`] encrypts the payload and signs VAPID claims with the
//! `web-push` crate, then sends the HTTP request through a shared `reqwest`
//! client. The VAPID key pair is taken once at construction from
//! [`portal_common::PushConfig`]; there is no process-global "configured"
//! state.

use async_trait::async_trait;
use portal_common::PushConfig;
use portal_core::entities::PushSubscription;
use thiserror::Error;
use web_push::{ContentEncoding, SubscriptionInfo, VapidSignatureBuilder, WebPushMessageBuilder};

/// Push message TTL at the push service (24 hours)
const PUSH_TTL_SECONDS: u32 = 86_400;

/// Errors from a single delivery attempt
#[derive(Debug, Error)]
pub enum PushSendError {
    /// The push service reported the endpoint gone (HTTP 404/410);
    /// the subscription should be pruned from the store
    #[error("Subscription endpoint is gone")]
    Gone,

    /// Payload encryption or VAPID signing failed
    #[error("Failed to build push message: {0}")]
    Encryption(String),

    /// The HTTP request itself failed
    #[error("Push transport error: {0}")]
    Transport(String),

    /// The push service rejected the message with some other status
    #[error("Push service rejected message: HTTP {0}")]
    Rejected(u16),
}

impl PushSendError {
    /// Whether the subscription that produced this error should be removed
    #[must_use]
    pub fn is_gone(&self) -> bool {
        matches!(self, Self::Gone)
    }
}

/// Capability to deliver one encrypted push message.
///
/// Injected into [`crate::push::PushBroadcaster`] at construction; tests
/// substitute an in-memory implementation.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Deliver `payload` to a single subscription
    async fn send(&self, subscription: &PushSubscription, payload: &[u8])
        -> Result<(), PushSendError>;
}

/// Production sender backed by the `web-push` crate and `reqwest`
pub struct WebPushSender {
    client: reqwest::Client,
    private_key: String,
    subject: String,
}

impl WebPushSender {
    /// Create a sender from VAPID credentials loaded at startup
    #[must_use]
    pub fn new(config: &PushConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            private_key: config.private_key.clone(),
            subject: config.subject.clone(),
        }
    }
}

#[async_trait]
impl PushSender for WebPushSender {
    async fn send(
        &self,
        subscription: &PushSubscription,
        payload: &[u8],
    ) -> Result<(), PushSendError> {
        let sub_info = SubscriptionInfo::new(
            &subscription.endpoint,
            &subscription.p256dh,
            &subscription.auth,
        );

        let mut sig_builder = VapidSignatureBuilder::from_base64(&self.private_key, &sub_info)
            .map_err(|e| PushSendError::Encryption(e.to_string()))?;
        sig_builder.add_claim("sub", self.subject.as_str());
        let signature = sig_builder
            .build()
            .map_err(|e| PushSendError::Encryption(e.to_string()))?;

        let mut builder = WebPushMessageBuilder::new(&sub_info);
        builder.set_payload(ContentEncoding::Aes128Gcm, payload);
        builder.set_vapid_signature(signature);
        builder.set_ttl(PUSH_TTL_SECONDS);

        let message = builder
            .build()
            .map_err(|e| PushSendError::Encryption(e.to_string()))?;

        let mut request = self
            .client
            .post(message.endpoint.to_string())
            .header("TTL", message.ttl.to_string());

        if let Some(push_payload) = message.payload {
            request = request
                .header("Content-Encoding", push_payload.content_encoding.to_str())
                .header("Content-Type", "application/octet-stream");

            for (key, value) in &push_payload.crypto_headers {
                request = request.header(*key, value.as_str());
            }

            request = request.body(push_payload.content);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PushSendError::Transport(e.to_string()))?;

        match response.status().as_u16() {
            200..=299 => Ok(()),
            404 | 410 => Err(PushSendError::Gone),
            status => Err(PushSendError::Rejected(status)),
        }
    }
}

impl std::fmt::Debug for WebPushSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebPushSender")
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gone_is_prunable() {
        assert!(PushSendError::Gone.is_gone());
        assert!(!PushSendError::Rejected(429).is_gone());
        assert!(!PushSendError::Transport("timeout".to_string()).is_gone());
    }
}
