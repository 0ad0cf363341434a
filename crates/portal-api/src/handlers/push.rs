//! Push subscription handlers
//!
//! Subscribe/unsubscribe endpoints plus VAPID public key retrieval. All
//! three return small JSON bodies; subscribe and unsubscribe are idempotent.

use axum::{extract::State, Json};
use portal_service::{PublicKeyResponse, PushService, SubscribeRequest, UnsubscribeRequest};
use serde_json::{json, Value};

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// VAPID public key for browser subscription.
///
/// Returns 503 with a structured body when push is not configured.
///
/// GET /push/public-key
pub async fn public_key(State(state): State<AppState>) -> ApiResult<Json<PublicKeyResponse>> {
    let service = PushService::new(state.service_context());
    let response = service.public_key()?;
    Ok(Json(response))
}

/// Register a push subscription (idempotent upsert by endpoint)
///
/// POST /push/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<SubscribeRequest>,
) -> ApiResult<Json<Value>> {
    let service = PushService::new(state.service_context());
    let user_id = auth.0.map(|a| a.user_id);
    service.subscribe(request, user_id).await?;
    Ok(Json(json!({ "subscribed": true })))
}

/// Remove a push subscription (idempotent)
///
/// POST /push/unsubscribe
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(request): Json<UnsubscribeRequest>,
) -> ApiResult<Json<Value>> {
    let service = PushService::new(state.service_context());
    service.unsubscribe(request).await?;
    Ok(Json(json!({ "subscribed": false })))
}
