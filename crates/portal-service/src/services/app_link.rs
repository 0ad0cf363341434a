//! App launcher service

use portal_core::entities::AppLink;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{AppLinkResponse, CreateAppLinkRequest, UpdateAppLinkRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// App launcher service
pub struct AppLinkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AppLinkService<'a> {
    /// Create a new AppLinkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every launcher tile in display order
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<AppLinkResponse>> {
        let links = self.ctx.app_link_repo().list().await?;
        Ok(links.iter().map(AppLinkResponse::from).collect())
    }

    /// Create a tile (staff only)
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateAppLinkRequest) -> ServiceResult<AppLinkResponse> {
        let mut link = AppLink::new(request.name, request.url);
        link.description = request.description;
        link.icon_url = request.icon_url;
        link.sort_order = request.sort_order;

        self.ctx.app_link_repo().create(&link).await?;

        info!(link_id = %link.id, "App link created");
        Ok(AppLinkResponse::from(&link))
    }

    /// Update a tile (staff only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAppLinkRequest,
    ) -> ServiceResult<AppLinkResponse> {
        let mut link = self
            .ctx
            .app_link_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("App link", id.to_string()))?;

        if let Some(name) = request.name {
            link.name = name;
        }
        if let Some(url) = request.url {
            link.url = url;
        }
        if let Some(description) = request.description {
            link.description = Some(description);
        }
        if let Some(icon_url) = request.icon_url {
            link.icon_url = Some(icon_url);
        }
        if let Some(sort_order) = request.sort_order {
            link.sort_order = sort_order;
        }

        self.ctx.app_link_repo().update(&link).await?;

        info!(link_id = %id, "App link updated");
        Ok(AppLinkResponse::from(&link))
    }

    /// Delete a tile (staff only)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.app_link_repo().delete(id).await?;
        info!(link_id = %id, "App link deleted");
        Ok(())
    }
}
