//! Service context - dependency container for services
//!
//! Holds all repositories, cache stores, delivery capabilities, and other
//! dependencies needed by services. Everything is constructed once at
//! process start and injected here; no component reaches for global state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use portal_cache::{OtpStore, RedisPool};
use portal_common::auth::JwtService;
use portal_common::JwtConfig;
use portal_core::traits::{
    AppLinkRepository, CompanySettingsRepository, ContactRepository, ExecutiveMessageRepository,
    ItTipRepository, NewsRepository, PushSubscriptionRepository, RefreshTokenRepository,
    SuggestionRepository, ToolboxTalkRepository, UserRepository,
};
use portal_db::PgPool;
use portal_notify::{PushBroadcaster, SmsSender};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Redis-backed OTP store
/// - JWT service for access tokens
/// - SMS sender (real or logging fallback)
/// - Push broadcaster (absent when VAPID keys are not configured)
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: RedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,
    push_subscription_repo: Arc<dyn PushSubscriptionRepository>,
    news_repo: Arc<dyn NewsRepository>,
    toolbox_talk_repo: Arc<dyn ToolboxTalkRepository>,
    suggestion_repo: Arc<dyn SuggestionRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    app_link_repo: Arc<dyn AppLinkRepository>,
    it_tip_repo: Arc<dyn ItTipRepository>,
    executive_message_repo: Arc<dyn ExecutiveMessageRepository>,
    settings_repo: Arc<dyn CompanySettingsRepository>,

    // Cache stores
    otp_store: OtpStore,

    // Delivery
    sms_sender: Arc<dyn SmsSender>,
    push_broadcaster: Option<Arc<PushBroadcaster>>,
    push_public_key: Option<String>,

    // Services
    jwt_service: Arc<JwtService>,
    jwt_config: JwtConfig,

    // Runtime flags
    maintenance_mode: Arc<AtomicBool>,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    /// Get the push subscription repository
    pub fn push_subscription_repo(&self) -> &dyn PushSubscriptionRepository {
        self.push_subscription_repo.as_ref()
    }

    /// Get the news repository
    pub fn news_repo(&self) -> &dyn NewsRepository {
        self.news_repo.as_ref()
    }

    /// Get the toolbox talk repository
    pub fn toolbox_talk_repo(&self) -> &dyn ToolboxTalkRepository {
        self.toolbox_talk_repo.as_ref()
    }

    /// Get the suggestion repository
    pub fn suggestion_repo(&self) -> &dyn SuggestionRepository {
        self.suggestion_repo.as_ref()
    }

    /// Get the contact repository
    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    /// Get the app link repository
    pub fn app_link_repo(&self) -> &dyn AppLinkRepository {
        self.app_link_repo.as_ref()
    }

    /// Get the IT tip repository
    pub fn it_tip_repo(&self) -> &dyn ItTipRepository {
        self.it_tip_repo.as_ref()
    }

    /// Get the executive message repository
    pub fn executive_message_repo(&self) -> &dyn ExecutiveMessageRepository {
        self.executive_message_repo.as_ref()
    }

    /// Get the company settings repository
    pub fn settings_repo(&self) -> &dyn CompanySettingsRepository {
        self.settings_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the OTP store
    pub fn otp_store(&self) -> &OtpStore {
        &self.otp_store
    }

    // === Delivery ===

    /// Get the SMS sender
    pub fn sms_sender(&self) -> &dyn SmsSender {
        self.sms_sender.as_ref()
    }

    /// Get the push broadcaster, if push delivery is configured
    pub fn push_broadcaster(&self) -> Option<&Arc<PushBroadcaster>> {
        self.push_broadcaster.as_ref()
    }

    /// Get the VAPID public key, if push delivery is configured
    pub fn push_public_key(&self) -> Option<&str> {
        self.push_public_key.as_deref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get token lifetime configuration
    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // === Runtime flags ===

    /// Whether the portal is currently gated for maintenance
    pub fn is_maintenance_mode(&self) -> bool {
        self.maintenance_mode.load(Ordering::Relaxed)
    }

    /// Flip the maintenance gate
    pub fn set_maintenance_mode(&self, enabled: bool) {
        self.maintenance_mode.store(enabled, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"RedisPool")
            .field("repositories", &"...")
            .field("push_configured", &self.push_broadcaster.is_some())
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    push_subscription_repo: Option<Arc<dyn PushSubscriptionRepository>>,
    news_repo: Option<Arc<dyn NewsRepository>>,
    toolbox_talk_repo: Option<Arc<dyn ToolboxTalkRepository>>,
    suggestion_repo: Option<Arc<dyn SuggestionRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    app_link_repo: Option<Arc<dyn AppLinkRepository>>,
    it_tip_repo: Option<Arc<dyn ItTipRepository>>,
    executive_message_repo: Option<Arc<dyn ExecutiveMessageRepository>>,
    settings_repo: Option<Arc<dyn CompanySettingsRepository>>,
    otp_store: Option<OtpStore>,
    sms_sender: Option<Arc<dyn SmsSender>>,
    push_broadcaster: Option<Arc<PushBroadcaster>>,
    push_public_key: Option<String>,
    jwt_service: Option<Arc<JwtService>>,
    jwt_config: Option<JwtConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            user_repo: None,
            refresh_token_repo: None,
            push_subscription_repo: None,
            news_repo: None,
            toolbox_talk_repo: None,
            suggestion_repo: None,
            contact_repo: None,
            app_link_repo: None,
            it_tip_repo: None,
            executive_message_repo: None,
            settings_repo: None,
            otp_store: None,
            sms_sender: None,
            push_broadcaster: None,
            push_public_key: None,
            jwt_service: None,
            jwt_config: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: RedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn push_subscription_repo(mut self, repo: Arc<dyn PushSubscriptionRepository>) -> Self {
        self.push_subscription_repo = Some(repo);
        self
    }

    pub fn news_repo(mut self, repo: Arc<dyn NewsRepository>) -> Self {
        self.news_repo = Some(repo);
        self
    }

    pub fn toolbox_talk_repo(mut self, repo: Arc<dyn ToolboxTalkRepository>) -> Self {
        self.toolbox_talk_repo = Some(repo);
        self
    }

    pub fn suggestion_repo(mut self, repo: Arc<dyn SuggestionRepository>) -> Self {
        self.suggestion_repo = Some(repo);
        self
    }

    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn app_link_repo(mut self, repo: Arc<dyn AppLinkRepository>) -> Self {
        self.app_link_repo = Some(repo);
        self
    }

    pub fn it_tip_repo(mut self, repo: Arc<dyn ItTipRepository>) -> Self {
        self.it_tip_repo = Some(repo);
        self
    }

    pub fn executive_message_repo(mut self, repo: Arc<dyn ExecutiveMessageRepository>) -> Self {
        self.executive_message_repo = Some(repo);
        self
    }

    pub fn settings_repo(mut self, repo: Arc<dyn CompanySettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn otp_store(mut self, store: OtpStore) -> Self {
        self.otp_store = Some(store);
        self
    }

    pub fn sms_sender(mut self, sender: Arc<dyn SmsSender>) -> Self {
        self.sms_sender = Some(sender);
        self
    }

    /// Push delivery is optional; omit when VAPID keys are absent
    pub fn push_broadcaster(mut self, broadcaster: Arc<PushBroadcaster>, public_key: String) -> Self {
        self.push_broadcaster = Some(broadcaster);
        self.push_public_key = Some(public_key);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn jwt_config(mut self, config: JwtConfig) -> Self {
        self.jwt_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            pool: self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            redis_pool: self
                .redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            refresh_token_repo: self
                .refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            push_subscription_repo: self
                .push_subscription_repo
                .ok_or_else(|| ServiceError::validation("push_subscription_repo is required"))?,
            news_repo: self
                .news_repo
                .ok_or_else(|| ServiceError::validation("news_repo is required"))?,
            toolbox_talk_repo: self
                .toolbox_talk_repo
                .ok_or_else(|| ServiceError::validation("toolbox_talk_repo is required"))?,
            suggestion_repo: self
                .suggestion_repo
                .ok_or_else(|| ServiceError::validation("suggestion_repo is required"))?,
            contact_repo: self
                .contact_repo
                .ok_or_else(|| ServiceError::validation("contact_repo is required"))?,
            app_link_repo: self
                .app_link_repo
                .ok_or_else(|| ServiceError::validation("app_link_repo is required"))?,
            it_tip_repo: self
                .it_tip_repo
                .ok_or_else(|| ServiceError::validation("it_tip_repo is required"))?,
            executive_message_repo: self
                .executive_message_repo
                .ok_or_else(|| ServiceError::validation("executive_message_repo is required"))?,
            settings_repo: self
                .settings_repo
                .ok_or_else(|| ServiceError::validation("settings_repo is required"))?,
            otp_store: self
                .otp_store
                .ok_or_else(|| ServiceError::validation("otp_store is required"))?,
            sms_sender: self
                .sms_sender
                .ok_or_else(|| ServiceError::validation("sms_sender is required"))?,
            push_broadcaster: self.push_broadcaster,
            push_public_key: self.push_public_key,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            jwt_config: self
                .jwt_config
                .ok_or_else(|| ServiceError::validation("jwt_config is required"))?,
            maintenance_mode: Arc::new(AtomicBool::new(false)),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
