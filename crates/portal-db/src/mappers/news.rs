//! News article entity <-> model mapper

use portal_core::entities::NewsArticle;

use crate::models::NewsArticleModel;

impl From<NewsArticleModel> for NewsArticle {
    fn from(model: NewsArticleModel) -> Self {
        NewsArticle {
            id: model.id,
            title: model.title,
            body: model.body,
            category: model.category,
            image_url: model.image_url,
            author_id: model.author_id,
            is_published: model.is_published,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
