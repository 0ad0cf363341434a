//! App link entity <-> model mapper

use portal_core::entities::AppLink;

use crate::models::AppLinkModel;

impl From<AppLinkModel> for AppLink {
    fn from(model: AppLinkModel) -> Self {
        AppLink {
            id: model.id,
            name: model.name,
            url: model.url,
            description: model.description,
            icon_url: model.icon_url,
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
