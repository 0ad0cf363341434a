//! Toolbox talk handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_service::{
    CreateToolboxTalkRequest, PaginatedResponse, ToolboxTalkResponse, ToolboxTalkService,
    UpdateToolboxTalkRequest,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Toolbox talk list query parameters
#[derive(Debug, Deserialize)]
pub struct TalkListQuery {
    pub topic: Option<String>,
    /// Include drafts (staff only)
    #[serde(default)]
    pub all: bool,
}

/// List toolbox talks by week
///
/// GET /toolbox-talks
pub async fn list_talks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TalkListQuery>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ToolboxTalkResponse>>> {
    let include_drafts = query.all && auth.role.is_staff();

    let service = ToolboxTalkService::new(state.service_context());
    let response = service
        .list(include_drafts, query.topic, pagination.to_page())
        .await?;
    Ok(Json(response))
}

/// Get one talk
///
/// GET /toolbox-talks/{talk_id}
pub async fn get_talk(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(talk_id): Path<String>,
) -> ApiResult<Json<ToolboxTalkResponse>> {
    let talk_id = parse_id(&talk_id)?;

    let service = ToolboxTalkService::new(state.service_context());
    let response = service.get(talk_id).await?;
    Ok(Json(response))
}

/// Create a talk
///
/// POST /toolbox-talks
pub async fn create_talk(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateToolboxTalkRequest>,
) -> ApiResult<Created<Json<ToolboxTalkResponse>>> {
    auth.require_staff()?;

    let service = ToolboxTalkService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a talk
///
/// PATCH /toolbox-talks/{talk_id}
pub async fn update_talk(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(talk_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateToolboxTalkRequest>,
) -> ApiResult<Json<ToolboxTalkResponse>> {
    auth.require_staff()?;
    let talk_id = parse_id(&talk_id)?;

    let service = ToolboxTalkService::new(state.service_context());
    let response = service.update(talk_id, request).await?;
    Ok(Json(response))
}

/// Delete a talk
///
/// DELETE /toolbox-talks/{talk_id}
pub async fn delete_talk(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(talk_id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;
    let talk_id = parse_id(&talk_id)?;

    let service = ToolboxTalkService::new(state.service_context());
    service.delete(talk_id).await?;
    Ok(NoContent)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid talk_id format"))
}
