//! Entity to response DTO mappers

use portal_core::entities::{
    AppLink, CompanySettings, Contact, ExecutiveMessage, ItTip, NewsArticle, PortalUser,
    Suggestion, ToolboxTalk,
};

use super::responses::{
    AppLinkResponse, CompanySettingsResponse, ContactResponse, CurrentUserResponse,
    ExecutiveMessageResponse, ItTipResponse, NewsArticleResponse, SuggestionResponse,
    ToolboxTalkResponse,
};

impl From<&PortalUser> for CurrentUserResponse {
    fn from(user: &PortalUser) -> Self {
        Self {
            id: user.id.to_string(),
            phone: user.phone.to_string(),
            full_name: user.full_name.clone(),
            department: user.department.clone(),
            role: user.role,
            phone_verified: user.phone_verified,
            login_count: user.login_count,
            created_at: user.created_at,
        }
    }
}

impl From<&NewsArticle> for NewsArticleResponse {
    fn from(article: &NewsArticle) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title.clone(),
            body: article.body.clone(),
            category: article.category.clone(),
            image_url: article.image_url.clone(),
            is_published: article.is_published,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<&ToolboxTalk> for ToolboxTalkResponse {
    fn from(talk: &ToolboxTalk) -> Self {
        Self {
            id: talk.id.to_string(),
            title: talk.title.clone(),
            content: talk.content.clone(),
            topic: talk.topic.clone(),
            week_of: talk.week_of,
            attachment_url: talk.attachment_url.clone(),
            is_published: talk.is_published,
            created_at: talk.created_at,
        }
    }
}

impl From<&Suggestion> for SuggestionResponse {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            id: suggestion.id.to_string(),
            subject: suggestion.subject.clone(),
            body: suggestion.body.clone(),
            is_anonymous: suggestion.is_anonymous,
            submitted_by: suggestion.submitted_by.map(|id| id.to_string()),
            status: suggestion.status,
            created_at: suggestion.created_at,
            updated_at: suggestion.updated_at,
        }
    }
}

impl From<&Contact> for ContactResponse {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            full_name: contact.full_name.clone(),
            department: contact.department.clone(),
            job_title: contact.job_title.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            sort_order: contact.sort_order,
        }
    }
}

impl From<&AppLink> for AppLinkResponse {
    fn from(link: &AppLink) -> Self {
        Self {
            id: link.id.to_string(),
            name: link.name.clone(),
            url: link.url.clone(),
            description: link.description.clone(),
            icon_url: link.icon_url.clone(),
            sort_order: link.sort_order,
        }
    }
}

impl From<&ItTip> for ItTipResponse {
    fn from(tip: &ItTip) -> Self {
        Self {
            id: tip.id.to_string(),
            title: tip.title.clone(),
            content: tip.content.clone(),
            is_published: tip.is_published,
            created_at: tip.created_at,
        }
    }
}

impl From<&ExecutiveMessage> for ExecutiveMessageResponse {
    fn from(message: &ExecutiveMessage) -> Self {
        Self {
            id: message.id.to_string(),
            title: message.title.clone(),
            body: message.body.clone(),
            executive_name: message.executive_name.clone(),
            executive_title: message.executive_title.clone(),
            is_active: message.is_active,
            created_at: message.created_at,
        }
    }
}

impl From<&CompanySettings> for CompanySettingsResponse {
    fn from(settings: &CompanySettings) -> Self {
        Self {
            about: settings.about.clone(),
            mission: settings.mission.clone(),
            vision: settings.vision.clone(),
            maintenance_mode: settings.maintenance_mode,
            updated_at: settings.updated_at,
        }
    }
}
