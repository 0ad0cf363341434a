//! Executive message entity <-> model mapper

use portal_core::entities::ExecutiveMessage;

use crate::models::ExecutiveMessageModel;

impl From<ExecutiveMessageModel> for ExecutiveMessage {
    fn from(model: ExecutiveMessageModel) -> Self {
        ExecutiveMessage {
            id: model.id,
            title: model.title,
            body: model.body,
            executive_name: model.executive_name,
            executive_title: model.executive_title,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
