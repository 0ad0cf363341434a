//! IT tip entity <-> model mapper

use portal_core::entities::ItTip;

use crate::models::ItTipModel;

impl From<ItTipModel> for ItTip {
    fn from(model: ItTipModel) -> Self {
        ItTip {
            id: model.id,
            title: model.title,
            content: model.content,
            is_published: model.is_published,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
