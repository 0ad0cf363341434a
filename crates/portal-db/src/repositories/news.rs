//! PostgreSQL implementation of NewsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::NewsArticle;
use portal_core::traits::{ContentFilter, NewsRepository, Page, RepoResult};

use crate::models::NewsArticleModel;

use super::error::{article_not_found, map_db_error};

/// PostgreSQL implementation of NewsRepository
#[derive(Clone)]
pub struct PgNewsRepository {
    pool: PgPool,
}

impl PgNewsRepository {
    /// Create a new PgNewsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<NewsArticle>> {
        let result = sqlx::query_as::<_, NewsArticleModel>(
            r"
            SELECT id, title, body, category, image_url, author_id, is_published,
                   published_at, created_at, updated_at
            FROM news_articles
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(NewsArticle::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ContentFilter, page: Page) -> RepoResult<Vec<NewsArticle>> {
        let rows = sqlx::query_as::<_, NewsArticleModel>(
            r"
            SELECT id, title, body, category, image_url, author_id, is_published,
                   published_at, created_at, updated_at
            FROM news_articles
            WHERE (NOT $1 OR is_published)
              AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY COALESCE(published_at, created_at) DESC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(filter.published_only)
        .bind(&filter.category)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(NewsArticle::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &ContentFilter) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM news_articles
            WHERE (NOT $1 OR is_published)
              AND ($2::TEXT IS NULL OR category = $2)
            ",
        )
        .bind(filter.published_only)
        .bind(&filter.category)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, article), fields(article_id = %article.id))]
    async fn create(&self, article: &NewsArticle) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO news_articles (id, title, body, category, image_url, author_id,
                                       is_published, published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(article.id)
        .bind(&article.title)
        .bind(&article.body)
        .bind(&article.category)
        .bind(&article.image_url)
        .bind(article.author_id)
        .bind(article.is_published)
        .bind(article.published_at)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, article), fields(article_id = %article.id))]
    async fn update(&self, article: &NewsArticle) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE news_articles
            SET title = $2, body = $3, category = $4, image_url = $5,
                is_published = $6, published_at = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(article.id)
        .bind(&article.title)
        .bind(&article.body)
        .bind(&article.category)
        .bind(&article.image_url)
        .bind(article.is_published)
        .bind(article.published_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(article_not_found(article.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM news_articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(article_not_found(id));
        }

        Ok(())
    }
}
