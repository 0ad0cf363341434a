//! Executive message service

use portal_core::entities::ExecutiveMessage;
use portal_core::traits::Page;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    CreateExecutiveMessageRequest, ExecutiveMessageResponse, PaginatedResponse,
    UpdateExecutiveMessageRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Executive message service
pub struct ExecutiveMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExecutiveMessageService<'a> {
    /// Create a new ExecutiveMessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List messages; readers see active ones, staff see the archive too
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        include_inactive: bool,
        page: Page,
    ) -> ServiceResult<PaginatedResponse<ExecutiveMessageResponse>> {
        let active_only = !include_inactive;
        let messages = self
            .ctx
            .executive_message_repo()
            .list(active_only, page)
            .await?;
        let total = self.ctx.executive_message_repo().count(active_only).await?;

        Ok(PaginatedResponse::new(
            messages.iter().map(ExecutiveMessageResponse::from).collect(),
            page.page,
            page.per_page,
            total,
        ))
    }

    /// Get one message
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ExecutiveMessageResponse> {
        let message = self
            .ctx
            .executive_message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Executive message", id.to_string()))?;

        Ok(ExecutiveMessageResponse::from(&message))
    }

    /// Create a message (staff only)
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        request: CreateExecutiveMessageRequest,
    ) -> ServiceResult<ExecutiveMessageResponse> {
        let mut message =
            ExecutiveMessage::new(request.title, request.body, request.executive_name);
        message.executive_title = request.executive_title;

        self.ctx.executive_message_repo().create(&message).await?;

        info!(message_id = %message.id, "Executive message created");
        Ok(ExecutiveMessageResponse::from(&message))
    }

    /// Update a message (staff only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateExecutiveMessageRequest,
    ) -> ServiceResult<ExecutiveMessageResponse> {
        let mut message = self
            .ctx
            .executive_message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Executive message", id.to_string()))?;

        if let Some(title) = request.title {
            message.title = title;
        }
        if let Some(body) = request.body {
            message.body = body;
        }
        if let Some(executive_name) = request.executive_name {
            message.executive_name = executive_name;
        }
        if let Some(executive_title) = request.executive_title {
            message.executive_title = Some(executive_title);
        }
        if let Some(is_active) = request.is_active {
            message.is_active = is_active;
        }

        self.ctx.executive_message_repo().update(&message).await?;

        info!(message_id = %id, "Executive message updated");
        Ok(ExecutiveMessageResponse::from(&message))
    }

    /// Delete a message (staff only)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.executive_message_repo().delete(id).await?;
        info!(message_id = %id, "Executive message deleted");
        Ok(())
    }
}
