//! PostgreSQL implementation of ToolboxTalkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::ToolboxTalk;
use portal_core::traits::{ContentFilter, Page, RepoResult, ToolboxTalkRepository};

use crate::models::ToolboxTalkModel;

use super::error::{map_db_error, toolbox_talk_not_found};

/// PostgreSQL implementation of ToolboxTalkRepository
#[derive(Clone)]
pub struct PgToolboxTalkRepository {
    pool: PgPool,
}

impl PgToolboxTalkRepository {
    /// Create a new PgToolboxTalkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToolboxTalkRepository for PgToolboxTalkRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ToolboxTalk>> {
        let result = sqlx::query_as::<_, ToolboxTalkModel>(
            r"
            SELECT id, title, content, topic, week_of, attachment_url, is_published,
                   created_at, updated_at
            FROM toolbox_talks
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ToolboxTalk::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ContentFilter, page: Page) -> RepoResult<Vec<ToolboxTalk>> {
        let rows = sqlx::query_as::<_, ToolboxTalkModel>(
            r"
            SELECT id, title, content, topic, week_of, attachment_url, is_published,
                   created_at, updated_at
            FROM toolbox_talks
            WHERE (NOT $1 OR is_published)
              AND ($2::TEXT IS NULL OR topic = $2)
            ORDER BY week_of DESC
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

        Ok(rows.into_iter().map(ToolboxTalk::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &ContentFilter) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM toolbox_talks
            WHERE (NOT $1 OR is_published)
              AND ($2::TEXT IS NULL OR topic = $2)
            ",
        )
        .bind(filter.published_only)
        .bind(&filter.category)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, talk), fields(talk_id = %talk.id))]
    async fn create(&self, talk: &ToolboxTalk) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO toolbox_talks (id, title, content, topic, week_of, attachment_url,
                                       is_published, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(talk.id)
        .bind(&talk.title)
        .bind(&talk.content)
        .bind(&talk.topic)
        .bind(talk.week_of)
        .bind(&talk.attachment_url)
        .bind(talk.is_published)
        .bind(talk.created_at)
        .bind(talk.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, talk), fields(talk_id = %talk.id))]
    async fn update(&self, talk: &ToolboxTalk) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE toolbox_talks
            SET title = $2, content = $3, topic = $4, week_of = $5,
                attachment_url = $6, is_published = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(talk.id)
        .bind(&talk.title)
        .bind(&talk.content)
        .bind(&talk.topic)
        .bind(talk.week_of)
        .bind(&talk.attachment_url)
        .bind(talk.is_published)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(toolbox_talk_not_found(talk.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM toolbox_talks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(toolbox_talk_not_found(id));
        }

        Ok(())
    }
}
