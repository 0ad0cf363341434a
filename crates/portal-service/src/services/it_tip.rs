//! IT tip service

use portal_core::entities::ItTip;
use portal_core::traits::{ContentFilter, Page};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateItTipRequest, ItTipResponse, PaginatedResponse, UpdateItTipRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// IT tip service
pub struct ItTipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ItTipService<'a> {
    /// Create a new ItTipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List tips, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        include_drafts: bool,
        page: Page,
    ) -> ServiceResult<PaginatedResponse<ItTipResponse>> {
        let filter = ContentFilter {
            published_only: !include_drafts,
            category: None,
        };

        let tips = self.ctx.it_tip_repo().list(&filter, page).await?;
        let total = self.ctx.it_tip_repo().count(&filter).await?;

        Ok(PaginatedResponse::new(
            tips.iter().map(ItTipResponse::from).collect(),
            page.page,
            page.per_page,
            total,
        ))
    }

    /// Get one tip
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ItTipResponse> {
        let tip = self
            .ctx
            .it_tip_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("IT tip", id.to_string()))?;

        Ok(ItTipResponse::from(&tip))
    }

    /// Create a tip (staff only)
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreateItTipRequest) -> ServiceResult<ItTipResponse> {
        let mut tip = ItTip::new(request.title, request.content);
        tip.is_published = request.publish;

        self.ctx.it_tip_repo().create(&tip).await?;

        info!(tip_id = %tip.id, "IT tip created");
        Ok(ItTipResponse::from(&tip))
    }

    /// Update a tip (staff only)
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdateItTipRequest) -> ServiceResult<ItTipResponse> {
        let mut tip = self
            .ctx
            .it_tip_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("IT tip", id.to_string()))?;

        if let Some(title) = request.title {
            tip.title = title;
        }
        if let Some(content) = request.content {
            tip.content = content;
        }
        if let Some(publish) = request.publish {
            tip.is_published = publish;
        }

        self.ctx.it_tip_repo().update(&tip).await?;

        info!(tip_id = %id, "IT tip updated");
        Ok(ItTipResponse::from(&tip))
    }

    /// Delete a tip (staff only)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.it_tip_repo().delete(id).await?;
        info!(tip_id = %id, "IT tip deleted");
        Ok(())
    }
}
