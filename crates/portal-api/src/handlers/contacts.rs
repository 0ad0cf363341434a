//! Staff directory handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_service::{
    ContactResponse, ContactService, CreateContactRequest, PaginatedResponse,
    UpdateContactRequest,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Directory list query parameters
#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
    pub department: Option<String>,
}

/// List directory entries
///
/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ContactListQuery>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ContactResponse>>> {
    let service = ContactService::new(state.service_context());
    let response = service
        .list(query.department, pagination.to_page())
        .await?;
    Ok(Json(response))
}

/// Get one directory entry
///
/// GET /contacts/{contact_id}
pub async fn get_contact(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(contact_id): Path<String>,
) -> ApiResult<Json<ContactResponse>> {
    let contact_id = parse_id(&contact_id)?;

    let service = ContactService::new(state.service_context());
    let response = service.get(contact_id).await?;
    Ok(Json(response))
}

/// Create a directory entry
///
/// POST /contacts
pub async fn create_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> ApiResult<Created<Json<ContactResponse>>> {
    auth.require_staff()?;

    let service = ContactService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a directory entry
///
/// PATCH /contacts/{contact_id}
pub async fn update_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(contact_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    auth.require_staff()?;
    let contact_id = parse_id(&contact_id)?;

    let service = ContactService::new(state.service_context());
    let response = service.update(contact_id, request).await?;
    Ok(Json(response))
}

/// Delete a directory entry
///
/// DELETE /contacts/{contact_id}
pub async fn delete_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(contact_id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;
    let contact_id = parse_id(&contact_id)?;

    let service = ContactService::new(state.service_context());
    service.delete(contact_id).await?;
    Ok(NoContent)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid contact_id format"))
}
