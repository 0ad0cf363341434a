//! Push subscription service
//!
//! Subscribe/unsubscribe are idempotent single-row operations keyed by the
//! endpoint URL. Broadcasting is fire-and-forget and lives on
//! [`PushBroadcaster`]; this service only spawns it.

use portal_common::AppError;
use portal_core::entities::PushSubscription;
use portal_notify::NotificationPayload;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{PublicKeyResponse, SubscribeRequest, UnsubscribeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Push subscription service
pub struct PushService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PushService<'a> {
    /// Create a new PushService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// VAPID public key for the browser's `pushManager.subscribe` call.
    ///
    /// Returns a structured not-configured failure (503) when delivery
    /// credentials are absent.
    pub fn public_key(&self) -> ServiceResult<PublicKeyResponse> {
        match self.ctx.push_public_key() {
            Some(key) => Ok(PublicKeyResponse {
                public_key: key.to_string(),
            }),
            None => Err(ServiceError::App(AppError::NotConfigured("Push delivery"))),
        }
    }

    /// Upsert a subscription keyed by endpoint
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint))]
    pub async fn subscribe(
        &self,
        request: SubscribeRequest,
        user_id: Option<Uuid>,
    ) -> ServiceResult<()> {
        let mut subscription =
            PushSubscription::new(request.endpoint, request.keys.p256dh, request.keys.auth);
        if let Some(user_id) = user_id {
            subscription = subscription.with_user(user_id);
        }

        self.ctx.push_subscription_repo().save(&subscription).await?;

        debug!("Push subscription saved");
        Ok(())
    }

    /// Delete a subscription by endpoint; absent endpoints are fine
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint))]
    pub async fn unsubscribe(&self, request: UnsubscribeRequest) -> ServiceResult<()> {
        let existed = self
            .ctx
            .push_subscription_repo()
            .remove(&request.endpoint)
            .await?;

        debug!(existed = existed, "Push subscription removed");
        Ok(())
    }

    /// Fire-and-forget broadcast to every stored subscription.
    ///
    /// Returns immediately; delivery runs on a spawned task and only logs.
    /// A no-op when push delivery is not configured.
    pub fn spawn_broadcast(&self, payload: NotificationPayload) {
        let Some(broadcaster) = self.ctx.push_broadcaster() else {
            debug!(title = %payload.title, "Push not configured, skipping broadcast");
            return;
        };

        let broadcaster = broadcaster.clone();
        tokio::spawn(async move {
            let report = broadcaster.broadcast(&payload).await;
            info!(
                delivered = report.delivered,
                failed = report.failed,
                pruned = report.pruned,
                "Background push broadcast settled"
            );
        });
    }
}
