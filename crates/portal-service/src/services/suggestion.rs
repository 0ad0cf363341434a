//! Suggestion box service
//!
//! Anyone can submit; only staff list and review. The reviewer-facing list
//! is role-gated at the API layer.

use portal_core::entities::{Suggestion, SuggestionStatus};
use portal_core::traits::Page;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateSuggestionRequest, PaginatedResponse, SuggestionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Suggestion box service
pub struct SuggestionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SuggestionService<'a> {
    /// Create a new SuggestionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a suggestion
    #[instrument(skip(self, request), fields(anonymous = request.is_anonymous))]
    pub async fn create(
        &self,
        submitted_by: Uuid,
        request: CreateSuggestionRequest,
    ) -> ServiceResult<SuggestionResponse> {
        let suggestion = Suggestion::new(
            request.subject,
            request.body,
            request.is_anonymous,
            Some(submitted_by),
        );

        self.ctx.suggestion_repo().create(&suggestion).await?;

        info!(suggestion_id = %suggestion.id, "Suggestion submitted");
        Ok(SuggestionResponse::from(&suggestion))
    }

    /// List suggestions, optionally by review status (staff only)
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        status: Option<SuggestionStatus>,
        page: Page,
    ) -> ServiceResult<PaginatedResponse<SuggestionResponse>> {
        let suggestions = self.ctx.suggestion_repo().list(status, page).await?;
        let total = self.ctx.suggestion_repo().count(status).await?;

        Ok(PaginatedResponse::new(
            suggestions.iter().map(SuggestionResponse::from).collect(),
            page.page,
            page.per_page,
            total,
        ))
    }

    /// Get one suggestion (staff only)
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<SuggestionResponse> {
        let suggestion = self
            .ctx
            .suggestion_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Suggestion", id.to_string()))?;

        Ok(SuggestionResponse::from(&suggestion))
    }

    /// Move a suggestion through its review workflow (staff only)
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: Uuid,
        status: SuggestionStatus,
    ) -> ServiceResult<SuggestionResponse> {
        self.ctx.suggestion_repo().update_status(id, status).await?;

        let suggestion = self
            .ctx
            .suggestion_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Suggestion", id.to_string()))?;

        info!(suggestion_id = %id, status = %status, "Suggestion status updated");
        Ok(SuggestionResponse::from(&suggestion))
    }

    /// Delete a suggestion (staff only)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.suggestion_repo().delete(id).await?;
        info!(suggestion_id = %id, "Suggestion deleted");
        Ok(())
    }
}
