//! Push fan-out delivery
//!
//! Fans a payload out to every stored subscription with all-settled
//! semantics: each attempt is independent, one failure never blocks the
//! rest, and the fan-out itself never raises to its caller. Endpoints the
//! push service reports gone are pruned from the store only after every
//! in-flight attempt has settled.

use std::sync::Arc;

use futures::future::join_all;
use portal_core::traits::PushSubscriptionRepository;
use tracing::{info, warn};

use super::payload::NotificationPayload;
use super::sender::{PushSendError, PushSender};

/// Aggregate outcome of one broadcast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Deliveries accepted by the push service
    pub delivered: usize,
    /// Deliveries that failed for reasons other than a gone endpoint
    pub failed: usize,
    /// Subscriptions removed because their endpoint is gone
    pub pruned: usize,
}

/// Fans notifications out to every stored subscription.
///
/// Delivery runs unbounded: every subscription gets its own concurrent
/// attempt with no cap, which matches acceptable subscriber volumes for an
/// intranet audience.
pub struct PushBroadcaster {
    subscriptions: Arc<dyn PushSubscriptionRepository>,
    sender: Arc<dyn PushSender>,
}

impl PushBroadcaster {
    /// Create a broadcaster over a subscription store and a delivery capability
    pub fn new(
        subscriptions: Arc<dyn PushSubscriptionRepository>,
        sender: Arc<dyn PushSender>,
    ) -> Self {
        Self {
            subscriptions,
            sender,
        }
    }

    /// Deliver a payload to every stored subscription.
    ///
    /// Never returns an error: failures are logged and reflected in the
    /// report so callers can fire-and-forget (`tokio::spawn`) without the
    /// triggering action ever blocking on delivery.
    pub async fn broadcast(&self, payload: &NotificationPayload) -> DeliveryReport {
        let subscriptions = match self.subscriptions.find_all().await {
            Ok(subs) => subs,
            Err(e) => {
                warn!(error = %e, "Failed to load push subscriptions, skipping broadcast");
                return DeliveryReport::default();
            }
        };

        if subscriptions.is_empty() {
            return DeliveryReport::default();
        }

        let bytes = match payload.to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to serialize push payload, skipping broadcast");
                return DeliveryReport::default();
            }
        };

        let attempts = subscriptions.iter().map(|subscription| {
            let bytes = bytes.as_slice();
            async move {
                let result = self.sender.send(subscription, bytes).await;
                (subscription.endpoint.as_str(), result)
            }
        });

        let mut report = DeliveryReport::default();
        let mut stale: Vec<String> = Vec::new();

        // All attempts settle before any pruning happens, so a concurrent
        // delete can never race an in-flight send.
        for (endpoint, result) in join_all(attempts).await {
            match result {
                Ok(()) => report.delivered += 1,
                Err(PushSendError::Gone) => stale.push(endpoint.to_string()),
                Err(e) => {
                    report.failed += 1;
                    warn!(endpoint = %endpoint, error = %e, "Push delivery failed");
                }
            }
        }

        if !stale.is_empty() {
            match self.subscriptions.remove_many(&stale).await {
                Ok(removed) => report.pruned = removed as usize,
                Err(e) => {
                    warn!(error = %e, count = stale.len(), "Failed to prune gone subscriptions");
                }
            }
        }

        info!(
            delivered = report.delivered,
            failed = report.failed,
            pruned = report.pruned,
            title = %payload.title,
            "Push broadcast finished"
        );

        report
    }
}

impl std::fmt::Debug for PushBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushBroadcaster").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use portal_core::entities::PushSubscription;
    use portal_core::traits::{RepoResult, PushSubscriptionRepository};
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-memory subscription store keyed by endpoint
    #[derive(Default)]
    struct MemorySubscriptions {
        rows: Mutex<Vec<PushSubscription>>,
    }

    impl MemorySubscriptions {
        fn with_endpoints(endpoints: &[&str]) -> Self {
            let rows = endpoints
                .iter()
                .map(|e| PushSubscription::new(*e, "p256dh", "auth"))
                .collect();
            Self {
                rows: Mutex::new(rows),
            }
        }

        fn endpoints(&self) -> Vec<String> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .map(|s| s.endpoint.clone())
                .collect()
        }
    }

    #[async_trait]
    impl PushSubscriptionRepository for MemorySubscriptions {
        async fn save(&self, subscription: &PushSubscription) -> RepoResult<()> {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|s| s.endpoint != subscription.endpoint);
            rows.push(subscription.clone());
            Ok(())
        }

        async fn remove(&self, endpoint: &str) -> RepoResult<bool> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|s| s.endpoint != endpoint);
            Ok(rows.len() < before)
        }

        async fn remove_many(&self, endpoints: &[String]) -> RepoResult<u64> {
            let gone: HashSet<&String> = endpoints.iter().collect();
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|s| !gone.contains(&s.endpoint));
            Ok((before - rows.len()) as u64)
        }

        async fn find_all(&self) -> RepoResult<Vec<PushSubscription>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn count(&self) -> RepoResult<i64> {
            Ok(self.rows.lock().unwrap().len() as i64)
        }
    }

    /// Sender that reports gone for a fixed set of endpoints
    struct FakeSender {
        gone: HashSet<String>,
    }

    impl FakeSender {
        fn with_gone(endpoints: &[&str]) -> Self {
            Self {
                gone: endpoints.iter().map(|s| (*s).to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl PushSender for FakeSender {
        async fn send(
            &self,
            subscription: &PushSubscription,
            _payload: &[u8],
        ) -> Result<(), PushSendError> {
            if self.gone.contains(&subscription.endpoint) {
                Err(PushSendError::Gone)
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_broadcast_delivers_to_all() {
        let store = Arc::new(MemorySubscriptions::with_endpoints(&["a", "b", "c"]));
        let sender = Arc::new(FakeSender::with_gone(&[]));
        let broadcaster = PushBroadcaster::new(store.clone(), sender);

        let report = broadcaster
            .broadcast(&NotificationPayload::new("title", "body"))
            .await;

        assert_eq!(report.delivered, 3);
        assert_eq!(report.failed, 0);
        assert_eq!(report.pruned, 0);
        assert_eq!(store.endpoints().len(), 3);
    }

    #[tokio::test]
    async fn test_gone_endpoints_are_pruned_after_fanout() {
        let store = Arc::new(MemorySubscriptions::with_endpoints(&["a", "b", "c", "d", "e"]));
        let sender = Arc::new(FakeSender::with_gone(&["b", "d"]));
        let broadcaster = PushBroadcaster::new(store.clone(), sender);

        let report = broadcaster
            .broadcast(&NotificationPayload::new("title", "body"))
            .await;

        // N = 5, M = 2 gone: exactly N - M delivered, exactly M removed
        assert_eq!(report.delivered, 3);
        assert_eq!(report.failed, 0);
        assert_eq!(report.pruned, 2);
        assert_eq!(store.endpoints(), vec!["a", "c", "e"]);
    }

    #[tokio::test]
    async fn test_non_gone_failures_do_not_prune() {
        struct FlakySender;

        #[async_trait]
        impl PushSender for FlakySender {
            async fn send(
                &self,
                subscription: &PushSubscription,
                _payload: &[u8],
            ) -> Result<(), PushSendError> {
                if subscription.endpoint == "flaky" {
                    Err(PushSendError::Rejected(500))
                } else {
                    Ok(())
                }
            }
        }

        let store = Arc::new(MemorySubscriptions::with_endpoints(&["ok", "flaky"]));
        let broadcaster = PushBroadcaster::new(store.clone(), Arc::new(FlakySender));

        let report = broadcaster
            .broadcast(&NotificationPayload::new("title", "body"))
            .await;

        assert_eq!(report.delivered, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.pruned, 0);
        assert_eq!(store.endpoints().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_store_is_a_noop() {
        let store = Arc::new(MemorySubscriptions::default());
        let sender = Arc::new(FakeSender::with_gone(&[]));
        let broadcaster = PushBroadcaster::new(store, sender);

        let report = broadcaster
            .broadcast(&NotificationPayload::new("title", "body"))
            .await;

        assert_eq!(report, DeliveryReport::default());
    }
}
