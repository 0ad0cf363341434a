//! Suggestion box handlers
//!
//! Any authenticated user can submit; listing and review are staff-only.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_core::SuggestionStatus;
use portal_service::{
    CreateSuggestionRequest, PaginatedResponse, SuggestionResponse, SuggestionService,
    UpdateSuggestionStatusRequest,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Suggestion list query parameters
#[derive(Debug, Deserialize)]
pub struct SuggestionListQuery {
    pub status: Option<SuggestionStatus>,
}

/// Submit a suggestion
///
/// POST /suggestions
pub async fn create_suggestion(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSuggestionRequest>,
) -> ApiResult<Created<Json<SuggestionResponse>>> {
    let service = SuggestionService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List suggestions (staff only)
///
/// GET /suggestions
pub async fn list_suggestions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SuggestionListQuery>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<SuggestionResponse>>> {
    auth.require_staff()?;

    let service = SuggestionService::new(state.service_context());
    let response = service.list(query.status, pagination.to_page()).await?;
    Ok(Json(response))
}

/// Get one suggestion (staff only)
///
/// GET /suggestions/{suggestion_id}
pub async fn get_suggestion(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(suggestion_id): Path<String>,
) -> ApiResult<Json<SuggestionResponse>> {
    auth.require_staff()?;
    let suggestion_id = parse_id(&suggestion_id)?;

    let service = SuggestionService::new(state.service_context());
    let response = service.get(suggestion_id).await?;
    Ok(Json(response))
}

/// Update a suggestion's review status (staff only)
///
/// PATCH /suggestions/{suggestion_id}/status
pub async fn update_suggestion_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(suggestion_id): Path<String>,
    Json(request): Json<UpdateSuggestionStatusRequest>,
) -> ApiResult<Json<SuggestionResponse>> {
    auth.require_staff()?;
    let suggestion_id = parse_id(&suggestion_id)?;

    let service = SuggestionService::new(state.service_context());
    let response = service.update_status(suggestion_id, request.status).await?;
    Ok(Json(response))
}

/// Delete a suggestion (staff only)
///
/// DELETE /suggestions/{suggestion_id}
pub async fn delete_suggestion(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(suggestion_id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;
    let suggestion_id = parse_id(&suggestion_id)?;

    let service = SuggestionService::new(state.service_context());
    service.delete(suggestion_id).await?;
    Ok(NoContent)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid suggestion_id format"))
}
