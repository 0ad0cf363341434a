//! Toolbox talk service

use portal_core::entities::ToolboxTalk;
use portal_core::traits::{ContentFilter, Page};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    CreateToolboxTalkRequest, PaginatedResponse, ToolboxTalkResponse, UpdateToolboxTalkRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Toolbox talk service
pub struct ToolboxTalkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ToolboxTalkService<'a> {
    /// Create a new ToolboxTalkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List talks by week, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        include_drafts: bool,
        topic: Option<String>,
        page: Page,
    ) -> ServiceResult<PaginatedResponse<ToolboxTalkResponse>> {
        let filter = ContentFilter {
            published_only: !include_drafts,
            category: topic.filter(|t| !t.is_empty()),
        };

        let talks = self.ctx.toolbox_talk_repo().list(&filter, page).await?;
        let total = self.ctx.toolbox_talk_repo().count(&filter).await?;

        Ok(PaginatedResponse::new(
            talks.iter().map(ToolboxTalkResponse::from).collect(),
            page.page,
            page.per_page,
            total,
        ))
    }

    /// Get one talk
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ToolboxTalkResponse> {
        let talk = self
            .ctx
            .toolbox_talk_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Toolbox talk", id.to_string()))?;

        Ok(ToolboxTalkResponse::from(&talk))
    }

    /// Create a talk
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreateToolboxTalkRequest) -> ServiceResult<ToolboxTalkResponse> {
        let mut talk = ToolboxTalk::new(request.title, request.content, request.week_of);
        talk.topic = request.topic;
        talk.attachment_url = request.attachment_url;
        talk.is_published = request.publish;

        self.ctx.toolbox_talk_repo().create(&talk).await?;

        info!(talk_id = %talk.id, "Toolbox talk created");
        Ok(ToolboxTalkResponse::from(&talk))
    }

    /// Update a talk
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateToolboxTalkRequest,
    ) -> ServiceResult<ToolboxTalkResponse> {
        let mut talk = self
            .ctx
            .toolbox_talk_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Toolbox talk", id.to_string()))?;

        if let Some(title) = request.title {
            talk.title = title;
        }
        if let Some(content) = request.content {
            talk.content = content;
        }
        if let Some(topic) = request.topic {
            talk.topic = Some(topic);
        }
        if let Some(week_of) = request.week_of {
            talk.week_of = week_of;
        }
        if let Some(attachment_url) = request.attachment_url {
            talk.attachment_url = Some(attachment_url);
        }
        if let Some(publish) = request.publish {
            talk.is_published = publish;
        }

        self.ctx.toolbox_talk_repo().update(&talk).await?;

        info!(talk_id = %id, "Toolbox talk updated");
        Ok(ToolboxTalkResponse::from(&talk))
    }

    /// Delete a talk
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.toolbox_talk_repo().delete(id).await?;
        info!(talk_id = %id, "Toolbox talk deleted");
        Ok(())
    }
}
