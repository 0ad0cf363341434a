//! News service
//!
//! CRUD over the news collection. Publishing an article fires the push
//! broadcast in the background; delivery can never block or fail the
//! publish itself.

use portal_core::entities::NewsArticle;
use portal_core::traits::{ContentFilter, Page};
use portal_notify::NotificationPayload;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateNewsRequest, NewsArticleResponse, PaginatedResponse, UpdateNewsRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::push::PushService;

/// News service
pub struct NewsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NewsService<'a> {
    /// Create a new NewsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List articles. Readers see published items only; staff see drafts too.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        include_drafts: bool,
        category: Option<String>,
        page: Page,
    ) -> ServiceResult<PaginatedResponse<NewsArticleResponse>> {
        let mut filter = ContentFilter {
            published_only: !include_drafts,
            category,
        };
        filter.category = filter.category.filter(|c| !c.is_empty());

        let articles = self.ctx.news_repo().list(&filter, page).await?;
        let total = self.ctx.news_repo().count(&filter).await?;

        Ok(PaginatedResponse::new(
            articles.iter().map(NewsArticleResponse::from).collect(),
            page.page,
            page.per_page,
            total,
        ))
    }

    /// Get one article
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<NewsArticleResponse> {
        let article = self
            .ctx
            .news_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", id.to_string()))?;

        Ok(NewsArticleResponse::from(&article))
    }

    /// Create an article, optionally publishing immediately
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        author_id: Uuid,
        request: CreateNewsRequest,
    ) -> ServiceResult<NewsArticleResponse> {
        let mut article = NewsArticle::new(request.title, request.body);
        article.category = request.category;
        article.image_url = request.image_url;
        article.author_id = Some(author_id);
        if request.publish {
            article.publish();
        }

        self.ctx.news_repo().create(&article).await?;
        info!(article_id = %article.id, published = article.is_published, "Article created");

        if article.is_published {
            self.broadcast_published(&article);
        }

        Ok(NewsArticleResponse::from(&article))
    }

    /// Update an article; transitioning to published fires the broadcast
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateNewsRequest,
    ) -> ServiceResult<NewsArticleResponse> {
        let mut article = self
            .ctx
            .news_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article", id.to_string()))?;

        let was_published = article.is_published;

        if let Some(title) = request.title {
            article.title = title;
        }
        if let Some(body) = request.body {
            article.body = body;
        }
        if let Some(category) = request.category {
            article.category = Some(category);
        }
        if let Some(image_url) = request.image_url {
            article.image_url = Some(image_url);
        }
        match request.publish {
            Some(true) => article.publish(),
            Some(false) => article.is_published = false,
            None => {}
        }

        self.ctx.news_repo().update(&article).await?;
        info!(article_id = %article.id, "Article updated");

        if article.is_published && !was_published {
            self.broadcast_published(&article);
        }

        Ok(NewsArticleResponse::from(&article))
    }

    /// Delete an article
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.news_repo().delete(id).await?;
        info!(article_id = %id, "Article deleted");
        Ok(())
    }

    fn broadcast_published(&self, article: &NewsArticle) {
        let payload = NotificationPayload::new("Company news", article.title.clone())
            .with_url(format!("/news/{}", article.id));
        PushService::new(self.ctx).spawn_broadcast(payload);
    }
}
