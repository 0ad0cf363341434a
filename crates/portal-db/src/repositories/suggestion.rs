//! PostgreSQL implementation of SuggestionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::{Suggestion, SuggestionStatus};
use portal_core::traits::{Page, RepoResult, SuggestionRepository};

use crate::models::SuggestionModel;

use super::error::{map_db_error, suggestion_not_found};

/// PostgreSQL implementation of SuggestionRepository
#[derive(Clone)]
pub struct PgSuggestionRepository {
    pool: PgPool,
}

impl PgSuggestionRepository {
    /// Create a new PgSuggestionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SuggestionRepository for PgSuggestionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Suggestion>> {
        let result = sqlx::query_as::<_, SuggestionModel>(
            r"
            SELECT id, subject, body, is_anonymous, submitted_by, status, created_at, updated_at
            FROM suggestions
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Suggestion::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        status: Option<SuggestionStatus>,
        page: Page,
    ) -> RepoResult<Vec<Suggestion>> {
        let rows = sqlx::query_as::<_, SuggestionModel>(
            r"
            SELECT id, subject, body, is_anonymous, submitted_by, status, created_at, updated_at
            FROM suggestions
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(status.map(|s| s.as_str()))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Suggestion::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self, status: Option<SuggestionStatus>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM suggestions
            WHERE ($1::TEXT IS NULL OR status = $1)
            ",
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, suggestion), fields(suggestion_id = %suggestion.id))]
    async fn create(&self, suggestion: &Suggestion) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO suggestions (id, subject, body, is_anonymous, submitted_by,
                                     status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(suggestion.id)
        .bind(&suggestion.subject)
        .bind(&suggestion.body)
        .bind(suggestion.is_anonymous)
        .bind(suggestion.submitted_by)
        .bind(suggestion.status.as_str())
        .bind(suggestion.created_at)
        .bind(suggestion.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: SuggestionStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE suggestions
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(suggestion_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM suggestions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(suggestion_not_found(id));
        }

        Ok(())
    }
}
