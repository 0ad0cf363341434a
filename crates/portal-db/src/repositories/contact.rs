//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::Contact;
use portal_core::traits::{ContactRepository, Page, RepoResult};

use crate::models::ContactModel;

use super::error::{contact_not_found, map_db_error};

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Contact>> {
        let result = sqlx::query_as::<_, ContactModel>(
            r"
            SELECT id, full_name, department, job_title, phone, email, sort_order,
                   created_at, updated_at
            FROM contacts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Contact::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, department: Option<&str>, page: Page) -> RepoResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactModel>(
            r"
            SELECT id, full_name, department, job_title, phone, email, sort_order,
                   created_at, updated_at
            FROM contacts
            WHERE ($1::TEXT IS NULL OR department = $1)
            ORDER BY sort_order, full_name
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(department)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, department: Option<&str>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM contacts
            WHERE ($1::TEXT IS NULL OR department = $1)
            ",
        )
        .bind(department)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, contact), fields(contact_id = %contact.id))]
    async fn create(&self, contact: &Contact) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contacts (id, full_name, department, job_title, phone, email,
                                  sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(contact.id)
        .bind(&contact.full_name)
        .bind(&contact.department)
        .bind(&contact.job_title)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(contact.sort_order)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, contact), fields(contact_id = %contact.id))]
    async fn update(&self, contact: &Contact) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE contacts
            SET full_name = $2, department = $3, job_title = $4, phone = $5,
                email = $6, sort_order = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(contact.id)
        .bind(&contact.full_name)
        .bind(&contact.department)
        .bind(&contact.job_title)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(contact.sort_order)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(contact_not_found(contact.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(contact_not_found(id));
        }

        Ok(())
    }
}
