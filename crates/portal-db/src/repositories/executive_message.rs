//! PostgreSQL implementation of ExecutiveMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::ExecutiveMessage;
use portal_core::traits::{ExecutiveMessageRepository, Page, RepoResult};

use crate::models::ExecutiveMessageModel;

use super::error::{executive_message_not_found, map_db_error};

/// PostgreSQL implementation of ExecutiveMessageRepository
#[derive(Clone)]
pub struct PgExecutiveMessageRepository {
    pool: PgPool,
}

impl PgExecutiveMessageRepository {
    /// Create a new PgExecutiveMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExecutiveMessageRepository for PgExecutiveMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ExecutiveMessage>> {
        let result = sqlx::query_as::<_, ExecutiveMessageModel>(
            r"
            SELECT id, title, body, executive_name, executive_title, is_active,
                   created_at, updated_at
            FROM executive_messages
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ExecutiveMessage::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, active_only: bool, page: Page) -> RepoResult<Vec<ExecutiveMessage>> {
        let rows = sqlx::query_as::<_, ExecutiveMessageModel>(
            r"
            SELECT id, title, body, executive_name, executive_title, is_active,
                   created_at, updated_at
            FROM executive_messages
            WHERE (NOT $1 OR is_active)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(active_only)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ExecutiveMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, active_only: bool) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM executive_messages WHERE (NOT $1 OR is_active)
            ",
        )
        .bind(active_only)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &ExecutiveMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO executive_messages (id, title, body, executive_name, executive_title,
                                            is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(message.id)
        .bind(&message.title)
        .bind(&message.body)
        .bind(&message.executive_name)
        .bind(&message.executive_title)
        .bind(message.is_active)
        .bind(message.created_at)
        .bind(message.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn update(&self, message: &ExecutiveMessage) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE executive_messages
            SET title = $2, body = $3, executive_name = $4, executive_title = $5,
                is_active = $6, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(message.id)
        .bind(&message.title)
        .bind(&message.body)
        .bind(&message.executive_name)
        .bind(&message.executive_title)
        .bind(message.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(executive_message_not_found(message.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM executive_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(executive_message_not_found(id));
        }

        Ok(())
    }
}
