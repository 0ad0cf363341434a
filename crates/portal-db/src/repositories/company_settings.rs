//! PostgreSQL implementation of CompanySettingsRepository
//!
//! A single-row table (id fixed at 1). Reads return defaults until the row
//! is first written; writes upsert the fixed row.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::entities::CompanySettings;
use portal_core::traits::{CompanySettingsRepository, RepoResult};

use crate::models::CompanySettingsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CompanySettingsRepository
#[derive(Clone)]
pub struct PgCompanySettingsRepository {
    pool: PgPool,
}

impl PgCompanySettingsRepository {
    /// Create a new PgCompanySettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanySettingsRepository for PgCompanySettingsRepository {
    #[instrument(skip(self))]
    async fn get(&self) -> RepoResult<CompanySettings> {
        let result = sqlx::query_as::<_, CompanySettingsModel>(
            r"
            SELECT id, about, mission, vision, maintenance_mode, updated_at
            FROM company_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CompanySettings::from).unwrap_or_default())
    }

    #[instrument(skip(self, settings))]
    async fn save(&self, settings: &CompanySettings) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO company_settings (id, about, mission, vision, maintenance_mode, updated_at)
            VALUES (1, $1, $2, $3, $4, NOW())
            ON CONFLICT (id)
            DO UPDATE SET about = EXCLUDED.about,
                          mission = EXCLUDED.mission,
                          vision = EXCLUDED.vision,
                          maintenance_mode = EXCLUDED.maintenance_mode,
                          updated_at = NOW()
            ",
        )
        .bind(&settings.about)
        .bind(&settings.mission)
        .bind(&settings.vision)
        .bind(settings.maintenance_mode)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
