//! PostgreSQL implementation of ItTipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::ItTip;
use portal_core::traits::{ContentFilter, ItTipRepository, Page, RepoResult};

use crate::models::ItTipModel;

use super::error::{it_tip_not_found, map_db_error};

/// PostgreSQL implementation of ItTipRepository
#[derive(Clone)]
pub struct PgItTipRepository {
    pool: PgPool,
}

impl PgItTipRepository {
    /// Create a new PgItTipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItTipRepository for PgItTipRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ItTip>> {
        let result = sqlx::query_as::<_, ItTipModel>(
            r"
            SELECT id, title, content, is_published, created_at, updated_at
            FROM it_tips
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ItTip::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ContentFilter, page: Page) -> RepoResult<Vec<ItTip>> {
        let rows = sqlx::query_as::<_, ItTipModel>(
            r"
            SELECT id, title, content, is_published, created_at, updated_at
            FROM it_tips
            WHERE (NOT $1 OR is_published)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(filter.published_only)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ItTip::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &ContentFilter) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM it_tips WHERE (NOT $1 OR is_published)
            ",
        )
        .bind(filter.published_only)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, tip), fields(tip_id = %tip.id))]
    async fn create(&self, tip: &ItTip) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO it_tips (id, title, content, is_published, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(tip.id)
        .bind(&tip.title)
        .bind(&tip.content)
        .bind(tip.is_published)
        .bind(tip.created_at)
        .bind(tip.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, tip), fields(tip_id = %tip.id))]
    async fn update(&self, tip: &ItTip) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE it_tips
            SET title = $2, content = $3, is_published = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(tip.id)
        .bind(&tip.title)
        .bind(&tip.content)
        .bind(tip.is_published)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(it_tip_not_found(tip.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM it_tips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(it_tip_not_found(id));
        }

        Ok(())
    }
}
