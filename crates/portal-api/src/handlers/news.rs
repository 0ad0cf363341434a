//! News handlers
//!
//! Reader endpoints serve published articles; management endpoints are
//! restricted to staff roles.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_service::{
    CreateNewsRequest, NewsArticleResponse, NewsService, PaginatedResponse, UpdateNewsRequest,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// News list query parameters
#[derive(Debug, Deserialize)]
pub struct NewsListQuery {
    pub category: Option<String>,
    /// Include drafts (staff only)
    #[serde(default)]
    pub all: bool,
}

/// List news articles
///
/// GET /news
pub async fn list_news(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<NewsListQuery>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<NewsArticleResponse>>> {
    let include_drafts = query.all && auth.role.is_staff();

    let service = NewsService::new(state.service_context());
    let response = service
        .list(include_drafts, query.category, pagination.to_page())
        .await?;
    Ok(Json(response))
}

/// Get one article
///
/// GET /news/{article_id}
pub async fn get_article(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(article_id): Path<String>,
) -> ApiResult<Json<NewsArticleResponse>> {
    let article_id = parse_id(&article_id)?;

    let service = NewsService::new(state.service_context());
    let response = service.get(article_id).await?;
    Ok(Json(response))
}

/// Create an article
///
/// POST /news
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateNewsRequest>,
) -> ApiResult<Created<Json<NewsArticleResponse>>> {
    auth.require_staff()?;

    let service = NewsService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update an article
///
/// PATCH /news/{article_id}
pub async fn update_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(article_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateNewsRequest>,
) -> ApiResult<Json<NewsArticleResponse>> {
    auth.require_staff()?;
    let article_id = parse_id(&article_id)?;

    let service = NewsService::new(state.service_context());
    let response = service.update(article_id, request).await?;
    Ok(Json(response))
}

/// Delete an article
///
/// DELETE /news/{article_id}
pub async fn delete_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(article_id): Path<String>,
) -> ApiResult<NoContent> {
    auth.require_staff()?;
    let article_id = parse_id(&article_id)?;

    let service = NewsService::new(state.service_context());
    service.delete(article_id).await?;
    Ok(NoContent)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid article_id format"))
}
