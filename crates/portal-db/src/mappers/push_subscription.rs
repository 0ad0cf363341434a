//! Push subscription entity <-> model mapper

use portal_core::entities::PushSubscription;

use crate::models::PushSubscriptionModel;

impl From<PushSubscriptionModel> for PushSubscription {
    fn from(model: PushSubscriptionModel) -> Self {
        PushSubscription {
            endpoint: model.endpoint,
            p256dh: model.p256dh,
            auth: model.auth,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
