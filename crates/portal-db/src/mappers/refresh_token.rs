//! Refresh token entity <-> model mapper

use portal_core::entities::RefreshToken;

use crate::models::RefreshTokenModel;

impl From<RefreshTokenModel> for RefreshToken {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshToken {
            id: model.id,
            user_id: model.user_id,
            token_hash: model.token_hash,
            device_info: model.device_info,
            ip_address: model.ip_address,
            expires_at: model.expires_at,
            created_at: model.created_at,
            revoked_at: model.revoked_at,
        }
    }
}
