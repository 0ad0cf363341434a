//! User entity <-> model mapper

use portal_core::entities::PortalUser;
use portal_core::error::DomainError;
use portal_core::value_objects::PhoneNumber;

use crate::models::UserModel;

/// Convert UserModel to PortalUser entity.
///
/// Fallible: the stored phone and role strings must parse back into their
/// value objects. Rows are only ever written through those value objects,
/// so a failure here means corrupted data and surfaces as a database error.
impl TryFrom<UserModel> for PortalUser {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let phone = PhoneNumber::parse(&model.phone)
            .map_err(|_| DomainError::DatabaseError(format!("Corrupt phone for user {}", model.id)))?;
        let role = model
            .role
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("Corrupt role for user {}", model.id)))?;

        Ok(PortalUser {
            id: model.id,
            phone,
            full_name: model.full_name,
            department: model.department,
            role,
            phone_verified: model.phone_verified,
            login_count: model.login_count,
            last_login_at: model.last_login_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
