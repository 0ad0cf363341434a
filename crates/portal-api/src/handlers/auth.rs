//! Authentication handlers
//!
//! Endpoints for the OTP login flow, token refresh, and logout.

use axum::{extract::State, http::HeaderMap, Json};
use portal_service::{
    AuthResponse, AuthService, LogoutRequest, OtpRequestedResponse, RefreshTokenRequest,
    RequestOtpRequest, VerifyOtpRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Request a one-time login code via SMS
///
/// POST /auth/otp/request
pub async fn request_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RequestOtpRequest>,
) -> ApiResult<Json<OtpRequestedResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.request_otp(request).await?;
    Ok(Json(response))
}

/// Verify a one-time code and receive a token pair
///
/// POST /auth/otp/verify
pub async fn verify_otp(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<VerifyOtpRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.verify_otp(request, client_ip(&headers)).await?;
    Ok(Json(response))
}

/// Rotate a refresh token into a new token pair
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Logout user
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<Json<LogoutRequest>>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    let refresh_token = body.and_then(|b| b.0.refresh_token);
    service.logout(auth.user_id, refresh_token).await?;
    Ok(NoContent)
}

/// Best-effort client IP from proxy headers
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
