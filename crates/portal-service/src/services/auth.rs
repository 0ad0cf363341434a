//! Authentication service
//!
//! Phone-number login: a one-time SMS code proves possession of the phone,
//! after which the service issues a short-lived access JWT and a rotating
//! opaque refresh token. Each device holds its own refresh-token chain.

use portal_cache::OtpOutcome;
use portal_common::auth::{generate_otp_code, generate_refresh_token, hash_token};
use portal_common::AppError;
use portal_core::entities::{PortalUser, RefreshToken};
use portal_core::value_objects::PhoneNumber;
use portal_notify::{SmsDelivery, SmsError};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    AuthResponse, CurrentUserResponse, OtpRequestedResponse, RefreshTokenRequest,
    RequestOtpRequest, VerifyOtpRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Request a one-time login code for a phone number
    #[instrument(skip(self, request))]
    pub async fn request_otp(&self, request: RequestOtpRequest) -> ServiceResult<OtpRequestedResponse> {
        let phone = PhoneNumber::parse(&request.phone).map_err(ServiceError::from)?;

        let code = generate_otp_code();
        self.ctx
            .otp_store()
            .store(phone.as_str(), &code)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let message = format!(
            "Your portal verification code is {code}. It expires in {} minutes.",
            self.ctx.otp_store().ttl_seconds() / 60
        );

        let delivery = match self.ctx.sms_sender().send(phone.as_str(), &message).await {
            Ok(SmsDelivery::Sent) => "sent",
            // Deliberate dev fallback: the sender logged the code and the
            // flow continues.
            Ok(SmsDelivery::Logged) => "logged",
            Err(SmsError::SenderNotRegistered) => {
                // Operator problem, not a user problem: retrying cannot help
                // until the sender ID is registered with the provider.
                error!(phone = %phone, "SMS sender ID not registered with provider");
                return Err(ServiceError::App(AppError::ExternalService(
                    "SMS delivery unavailable".to_string(),
                )));
            }
            Err(e) => {
                warn!(phone = %phone, error = %e, "SMS delivery failed");
                return Err(ServiceError::App(AppError::ExternalService(
                    "SMS delivery failed".to_string(),
                )));
            }
        };

        info!(phone = %phone, delivery = delivery, "One-time code issued");

        Ok(OtpRequestedResponse {
            phone: phone.to_string(),
            expires_in: self.ctx.otp_store().ttl_seconds(),
            delivery,
        })
    }

    /// Verify a one-time code and establish a session
    #[instrument(skip(self, request), fields(phone = %request.phone))]
    pub async fn verify_otp(
        &self,
        request: VerifyOtpRequest,
        ip_address: Option<String>,
    ) -> ServiceResult<AuthResponse> {
        let phone = PhoneNumber::parse(&request.phone).map_err(ServiceError::from)?;

        match self
            .ctx
            .otp_store()
            .verify(phone.as_str(), &request.code)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
        {
            OtpOutcome::Verified => {}
            // Wrong guess and missing/expired code are reported identically
            OtpOutcome::Mismatch | OtpOutcome::Missing => {
                warn!(phone = %phone, "One-time code verification failed");
                return Err(ServiceError::Domain(
                    portal_core::DomainError::InvalidOtpCode,
                ));
            }
        }

        // First login creates the account
        let mut user = match self.ctx.user_repo().find_by_phone(&phone).await? {
            Some(user) => user,
            None => {
                let user = PortalUser::new(phone.clone());
                self.ctx.user_repo().create(&user).await?;
                info!(user_id = %user.id, "Portal user created on first login");
                user
            }
        };

        user.record_login();
        self.ctx.user_repo().update(&user).await?;

        let response = self
            .issue_session(&user, request.device_info, ip_address)
            .await?;

        info!(user_id = %user.id, login_count = user.login_count, "User logged in");
        Ok(response)
    }

    /// Exchange a refresh token for a new token pair, rotating the old one.
    ///
    /// Unknown, revoked, and expired tokens are rejected identically: the
    /// conditional revocation either transitions the active row or reports
    /// there was nothing to transition, and the caller learns nothing more.
    /// A stolen token replayed after rotation therefore fails closed, while
    /// the new token issued here keeps the legitimate device's chain alive.
    #[instrument(skip_all)]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let token_hash = hash_token(&request.refresh_token);

        // Read the row first for its metadata, then take the atomic
        // revocation as the actual guard against concurrent reuse.
        let current = self
            .ctx
            .refresh_token_repo()
            .find_active_by_hash(&token_hash)
            .await?
            .ok_or(ServiceError::Domain(
                portal_core::DomainError::SessionNotFound,
            ))?;

        let rotated = self
            .ctx
            .refresh_token_repo()
            .revoke_active_by_hash(&token_hash)
            .await?;
        if !rotated {
            warn!(user_id = %current.user_id, "Refresh token lost rotation race");
            return Err(ServiceError::Domain(
                portal_core::DomainError::SessionNotFound,
            ));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(current.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", current.user_id.to_string()))?;

        let response = self
            .issue_session(&user, current.device_info, current.ip_address)
            .await?;

        info!(user_id = %user.id, "Tokens rotated");
        Ok(response)
    }

    /// Logout: revoke one refresh token, or every token of the user.
    ///
    /// Idempotent - revoking an already-dead token is not an error.
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(&self, user_id: Uuid, refresh_token: Option<String>) -> ServiceResult<()> {
        match refresh_token {
            Some(token) => {
                let token_hash = hash_token(&token);
                self.ctx
                    .refresh_token_repo()
                    .revoke_active_by_hash(&token_hash)
                    .await?;
            }
            None => {
                let count = self
                    .ctx
                    .refresh_token_repo()
                    .revoke_all_for_user(user_id)
                    .await?;
                info!(user_id = %user_id, count = count, "Revoked all sessions");
            }
        }

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Physically prune refresh tokens expired past the grace window.
    ///
    /// Called by the periodic sweep task.
    #[instrument(skip(self))]
    pub async fn prune_expired_tokens(&self) -> ServiceResult<u64> {
        let removed = self
            .ctx
            .refresh_token_repo()
            .delete_expired(self.ctx.jwt_config().refresh_token_grace)
            .await?;

        if removed > 0 {
            info!(removed = removed, "Pruned expired refresh tokens");
        }
        Ok(removed)
    }

    /// Issue an access JWT plus a fresh refresh-token chain link
    async fn issue_session(
        &self,
        user: &PortalUser,
        device_info: Option<String>,
        ip_address: Option<String>,
    ) -> ServiceResult<AuthResponse> {
        let access_token = self
            .ctx
            .jwt_service()
            .issue_access_token(user.id, user.role)
            .map_err(ServiceError::from)?;

        let raw_refresh = generate_refresh_token();
        let mut token = RefreshToken::new(
            user.id,
            hash_token(&raw_refresh),
            self.ctx.jwt_config().refresh_token_expiry,
        );
        if let Some(device) = device_info {
            token = token.with_device_info(device);
        }
        if let Some(ip) = ip_address {
            token = token.with_ip_address(ip);
        }

        self.ctx.refresh_token_repo().create(&token).await?;

        Ok(AuthResponse::new(
            access_token,
            raw_refresh,
            self.ctx.jwt_service().access_token_expiry(),
            CurrentUserResponse::from(user),
        ))
    }
}
