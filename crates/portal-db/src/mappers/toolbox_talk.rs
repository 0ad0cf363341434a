//! Toolbox talk entity <-> model mapper

use portal_core::entities::ToolboxTalk;

use crate::models::ToolboxTalkModel;

impl From<ToolboxTalkModel> for ToolboxTalk {
    fn from(model: ToolboxTalkModel) -> Self {
        ToolboxTalk {
            id: model.id,
            title: model.title,
            content: model.content,
            topic: model.topic,
            week_of: model.week_of,
            attachment_url: model.attachment_url,
            is_published: model.is_published,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
