//! Staff directory service

use portal_core::entities::Contact;
use portal_core::traits::Page;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{ContactResponse, CreateContactRequest, PaginatedResponse, UpdateContactRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Staff directory service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    /// Create a new ContactService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List directory entries, optionally by department
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        department: Option<String>,
        page: Page,
    ) -> ServiceResult<PaginatedResponse<ContactResponse>> {
        let department = department.filter(|d| !d.is_empty());
        let contacts = self
            .ctx
            .contact_repo()
            .list(department.as_deref(), page)
            .await?;
        let total = self.ctx.contact_repo().count(department.as_deref()).await?;

        Ok(PaginatedResponse::new(
            contacts.iter().map(ContactResponse::from).collect(),
            page.page,
            page.per_page,
            total,
        ))
    }

    /// Get one directory entry
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ContactResponse> {
        let contact = self
            .ctx
            .contact_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Contact", id.to_string()))?;

        Ok(ContactResponse::from(&contact))
    }

    /// Create a directory entry (staff only)
    #[instrument(skip(self, request), fields(name = %request.full_name))]
    pub async fn create(&self, request: CreateContactRequest) -> ServiceResult<ContactResponse> {
        let mut contact = Contact::new(request.full_name);
        contact.department = request.department;
        contact.job_title = request.job_title;
        contact.phone = request.phone;
        contact.email = request.email;
        contact.sort_order = request.sort_order;

        self.ctx.contact_repo().create(&contact).await?;

        info!(contact_id = %contact.id, "Contact created");
        Ok(ContactResponse::from(&contact))
    }

    /// Update a directory entry (staff only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateContactRequest,
    ) -> ServiceResult<ContactResponse> {
        let mut contact = self
            .ctx
            .contact_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Contact", id.to_string()))?;

        if let Some(full_name) = request.full_name {
            contact.full_name = full_name;
        }
        if let Some(department) = request.department {
            contact.department = Some(department);
        }
        if let Some(job_title) = request.job_title {
            contact.job_title = Some(job_title);
        }
        if let Some(phone) = request.phone {
            contact.phone = Some(phone);
        }
        if let Some(email) = request.email {
            contact.email = Some(email);
        }
        if let Some(sort_order) = request.sort_order {
            contact.sort_order = sort_order;
        }

        self.ctx.contact_repo().update(&contact).await?;

        info!(contact_id = %id, "Contact updated");
        Ok(ContactResponse::from(&contact))
    }

    /// Delete a directory entry (staff only)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.contact_repo().delete(id).await?;
        info!(contact_id = %id, "Contact deleted");
        Ok(())
    }
}
