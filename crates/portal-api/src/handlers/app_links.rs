//! App launcher handlers

use axum::{
    extract::{Path, State},
    Json,
};
use portal_service::{AppLinkResponse, AppLinkService, CreateAppLinkRequest, UpdateAppLinkRequest};
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List launcher tiles
///
/// GET /app-links
pub async fn list_app_links(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<AppLinkResponse>>> {
    let service = AppLinkService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Create a launcher tile
///
/// POST /app-links
pub async fn create_app_link(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateAppLinkRequest>,
) -> ApiResult<Created<Json<AppLinkResponse>>> {
    auth.require_staff()?;

    let service = AppLinkService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a launcher tile
///
/// PATCH /app-links/{link_id}
pub async fn update_app_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(link_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAppLinkRequest>,
) -> ApiResult<Json<AppLinkResponse>> {
    auth.require_staff()?;
    let link_id = parse_id(&link_id)?;

    let service = AppLinkService::new(state.service_context());
    let response = service.update(link_id, request).await?;
    Ok(Json(response))
}

/// Delete a launcher tile
///
/// DELETE /app-links/{link_id}
pub async fn delete_app_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(link_id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;
    let link_id = parse_id(&link_id)?;

    let service = AppLinkService::new(state.service_context());
    service.delete(link_id).await?;
    Ok(NoContent)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid link_id format"))
}
