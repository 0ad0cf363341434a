//! Executive message handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_service::{
    CreateExecutiveMessageRequest, ExecutiveMessageResponse, ExecutiveMessageService,
    PaginatedResponse, UpdateExecutiveMessageRequest,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Message list query parameters
#[derive(Debug, Deserialize)]
pub struct MessageListQuery {
    /// Include the deactivated archive (staff only)
    #[serde(default)]
    pub all: bool,
}

/// List executive messages
///
/// GET /executive-messages
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<MessageListQuery>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ExecutiveMessageResponse>>> {
    let include_inactive = query.all && auth.role.is_staff();

    let service = ExecutiveMessageService::new(state.service_context());
    let response = service
        .list(include_inactive, pagination.to_page())
        .await?;
    Ok(Json(response))
}

/// Get one message
///
/// GET /executive-messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(message_id): Path<String>,
) -> ApiResult<Json<ExecutiveMessageResponse>> {
    let message_id = parse_id(&message_id)?;

    let service = ExecutiveMessageService::new(state.service_context());
    let response = service.get(message_id).await?;
    Ok(Json(response))
}

/// Create a message
///
/// POST /executive-messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateExecutiveMessageRequest>,
) -> ApiResult<Created<Json<ExecutiveMessageResponse>>> {
    auth.require_staff()?;

    let service = ExecutiveMessageService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a message
///
/// PATCH /executive-messages/{message_id}
pub async fn update_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateExecutiveMessageRequest>,
) -> ApiResult<Json<ExecutiveMessageResponse>> {
    auth.require_staff()?;
    let message_id = parse_id(&message_id)?;

    let service = ExecutiveMessageService::new(state.service_context());
    let response = service.update(message_id, request).await?;
    Ok(Json(response))
}

/// Delete a message
///
/// DELETE /executive-messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;
    let message_id = parse_id(&message_id)?;

    let service = ExecutiveMessageService::new(state.service_context());
    service.delete(message_id).await?;
    Ok(NoContent)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid message_id format"))
}
