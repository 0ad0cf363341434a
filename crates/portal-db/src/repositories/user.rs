//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::PortalUser;
use portal_core::error::DomainError;
use portal_core::traits::{RepoResult, UserRepository};
use portal_core::value_objects::PhoneNumber;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

const USER_COLUMNS: &str = "id, phone, full_name, department, role, phone_verified, \
                            login_count, last_login_at, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<PortalUser>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PortalUser::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone: &PhoneNumber) -> RepoResult<Option<PortalUser>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE phone = $1 AND deleted_at IS NULL"
        ))
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PortalUser::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn phone_exists(&self, phone: &PhoneNumber) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE phone = $1 AND deleted_at IS NULL)
            ",
        )
        .bind(phone.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &PortalUser) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, phone, full_name, department, role, phone_verified,
                               login_count, last_login_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(user.id)
        .bind(user.phone.as_str())
        .bind(&user.full_name)
        .bind(&user.department)
        .bind(user.role.as_str())
        .bind(user.phone_verified)
        .bind(user.login_count)
        .bind(user.last_login_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PhoneAlreadyRegistered))?;

        Ok(())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: &PortalUser) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET full_name = $2, department = $3, role = $4, phone_verified = $5,
                login_count = $6, last_login_at = $7, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.department)
        .bind(user.role.as_str())
        .bind(user.phone_verified)
        .bind(user.login_count)
        .bind(user.last_login_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
