//! Suggestion entity <-> model mapper

use portal_core::entities::Suggestion;
use portal_core::error::DomainError;

use crate::models::SuggestionModel;

impl TryFrom<SuggestionModel> for Suggestion {
    type Error = DomainError;

    fn try_from(model: SuggestionModel) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|_| {
            DomainError::DatabaseError(format!("Corrupt status for suggestion {}", model.id))
        })?;

        Ok(Suggestion {
            id: model.id,
            subject: model.subject,
            body: model.body,
            is_anonymous: model.is_anonymous,
            submitted_by: model.submitted_by,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
