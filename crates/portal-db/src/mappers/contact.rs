//! Contact entity <-> model mapper

use portal_core::entities::Contact;

use crate::models::ContactModel;

impl From<ContactModel> for Contact {
    fn from(model: ContactModel) -> Self {
        Contact {
            id: model.id,
            full_name: model.full_name,
            department: model.department,
            job_title: model.job_title,
            phone: model.phone,
            email: model.email,
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
