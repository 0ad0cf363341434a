//! PostgreSQL implementation of PushSubscriptionRepository
//!
//! The endpoint URL is the primary key. `save` is an upsert so a browser
//! re-subscribing with fresh keys replaces its old row, and `remove` is
//! idempotent so pruning an already-gone endpoint is not an error.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::entities::PushSubscription;
use portal_core::traits::{PushSubscriptionRepository, RepoResult};

use crate::models::PushSubscriptionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PushSubscriptionRepository
#[derive(Clone)]
pub struct PgPushSubscriptionRepository {
    pool: PgPool,
}

impl PgPushSubscriptionRepository {
    /// Create a new PgPushSubscriptionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PushSubscriptionRepository for PgPushSubscriptionRepository {
    #[instrument(skip(self, subscription), fields(endpoint = %subscription.endpoint))]
    async fn save(&self, subscription: &PushSubscription) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO push_subscriptions (endpoint, p256dh, auth, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (endpoint)
            DO UPDATE SET p256dh = EXCLUDED.p256dh,
                          auth = EXCLUDED.auth,
                          user_id = EXCLUDED.user_id
            ",
        )
        .bind(&subscription.endpoint)
        .bind(&subscription.p256dh)
        .bind(&subscription.auth)
        .bind(subscription.user_id)
        .bind(subscription.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, endpoint: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM push_subscriptions WHERE endpoint = $1")
            .bind(endpoint)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(count = endpoints.len()))]
    async fn remove_many(&self, endpoints: &[String]) -> RepoResult<u64> {
        if endpoints.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM push_subscriptions WHERE endpoint = ANY($1)")
            .bind(endpoints)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<PushSubscription>> {
        let rows = sqlx::query_as::<_, PushSubscriptionModel>(
            r"
            SELECT endpoint, p256dh, auth, user_id, created_at
            FROM push_subscriptions
            ORDER BY created_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PushSubscription::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM push_subscriptions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPushSubscriptionRepository>();
    }
}
