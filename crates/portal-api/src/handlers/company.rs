//! Company settings handlers

use axum::{extract::State, Json};
use portal_service::{CompanyService, CompanySettingsResponse, UpdateCompanySettingsRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Read the portal settings
///
/// GET /company/settings
pub async fn get_settings(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<CompanySettingsResponse>> {
    let service = CompanyService::new(state.service_context());
    let response = service.get_settings().await?;
    Ok(Json(response))
}

/// Update the portal settings, including the maintenance gate
///
/// PATCH /company/settings
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateCompanySettingsRequest>,
) -> ApiResult<Json<CompanySettingsResponse>> {
    auth.require_staff()?;

    let service = CompanyService::new(state.service_context());
    let response = service.update_settings(request).await?;
    Ok(Json(response))
}
