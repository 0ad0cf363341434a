//! IT tip handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_service::{
    CreateItTipRequest, ItTipResponse, ItTipService, PaginatedResponse, UpdateItTipRequest,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Tip list query parameters
#[derive(Debug, Deserialize)]
pub struct TipListQuery {
    /// Include drafts (staff only)
    #[serde(default)]
    pub all: bool,
}

/// List IT tips
///
/// GET /it-tips
pub async fn list_tips(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TipListQuery>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ItTipResponse>>> {
    let include_drafts = query.all && auth.role.is_staff();

    let service = ItTipService::new(state.service_context());
    let response = service.list(include_drafts, pagination.to_page()).await?;
    Ok(Json(response))
}

/// Get one tip
///
/// GET /it-tips/{tip_id}
pub async fn get_tip(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(tip_id): Path<String>,
) -> ApiResult<Json<ItTipResponse>> {
    let tip_id = parse_id(&tip_id)?;

    let service = ItTipService::new(state.service_context());
    let response = service.get(tip_id).await?;
    Ok(Json(response))
}

/// Create a tip
///
/// POST /it-tips
pub async fn create_tip(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateItTipRequest>,
) -> ApiResult<Created<Json<ItTipResponse>>> {
    auth.require_staff()?;

    let service = ItTipService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a tip
///
/// PATCH /it-tips/{tip_id}
pub async fn update_tip(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tip_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateItTipRequest>,
) -> ApiResult<Json<ItTipResponse>> {
    auth.require_staff()?;
    let tip_id = parse_id(&tip_id)?;

    let service = ItTipService::new(state.service_context());
    let response = service.update(tip_id, request).await?;
    Ok(Json(response))
}

/// Delete a tip
///
/// DELETE /it-tips/{tip_id}
pub async fn delete_tip(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tip_id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;
    let tip_id = parse_id(&tip_id)?;

    let service = ItTipService::new(state.service_context());
    service.delete(tip_id).await?;
    Ok(NoContent)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid tip_id format"))
}
