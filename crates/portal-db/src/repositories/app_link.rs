//! PostgreSQL implementation of AppLinkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::AppLink;
use portal_core::traits::{AppLinkRepository, RepoResult};

use crate::models::AppLinkModel;

use super::error::{app_link_not_found, map_db_error};

/// PostgreSQL implementation of AppLinkRepository
#[derive(Clone)]
pub struct PgAppLinkRepository {
    pool: PgPool,
}

impl PgAppLinkRepository {
    /// Create a new PgAppLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppLinkRepository for PgAppLinkRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<AppLink>> {
        let result = sqlx::query_as::<_, AppLinkModel>(
            r"
            SELECT id, name, url, description, icon_url, sort_order, created_at, updated_at
            FROM app_links
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AppLink::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<AppLink>> {
        let rows = sqlx::query_as::<_, AppLinkModel>(
            r"
            SELECT id, name, url, description, icon_url, sort_order, created_at, updated_at
            FROM app_links
            ORDER BY sort_order, name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(AppLink::from).collect())
    }

    #[instrument(skip(self, link), fields(link_id = %link.id))]
    async fn create(&self, link: &AppLink) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO app_links (id, name, url, description, icon_url, sort_order,
                                   created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(link.id)
        .bind(&link.name)
        .bind(&link.url)
        .bind(&link.description)
        .bind(&link.icon_url)
        .bind(link.sort_order)
        .bind(link.created_at)
        .bind(link.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, link), fields(link_id = %link.id))]
    async fn update(&self, link: &AppLink) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE app_links
            SET name = $2, url = $3, description = $4, icon_url = $5,
                sort_order = $6, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(link.id)
        .bind(&link.name)
        .bind(&link.url)
        .bind(&link.description)
        .bind(&link.icon_url)
        .bind(link.sort_order)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(app_link_not_found(link.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM app_links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(app_link_not_found(id));
        }

        Ok(())
    }
}
