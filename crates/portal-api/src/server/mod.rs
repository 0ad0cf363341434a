//! Server setup and initialization
//!
//! Provides the main application builder and server runner. All delivery
//! capabilities (SMS, push) are constructed here, once, from configuration
//! and injected into the service context.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use portal_cache::{OtpStore, RedisPool, RedisPoolConfig};
use portal_common::{AppConfig, AppError, JwtService};
use portal_db::{
    create_pool, PgAppLinkRepository, PgCompanySettingsRepository, PgContactRepository,
    PgExecutiveMessageRepository, PgItTipRepository, PgNewsRepository,
    PgPushSubscriptionRepository, PgRefreshTokenRepository, PgSuggestionRepository,
    PgToolboxTalkRepository, PgUserRepository,
};
use portal_notify::{HttpSmsClient, LoggingSmsSender, PushBroadcaster, SmsSender, WebPushSender};
use portal_service::{AuthService, CompanyService, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware_with_config, maintenance_gate};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// How often the refresh-token sweep runs
const TOKEN_SWEEP_INTERVAL: Duration = Duration::from_secs(6 * 60 * 60);

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            maintenance_gate,
        ));
    let router = apply_middleware_with_config(
        router,
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );

    // Health probes bypass the rate limiter and maintenance gate
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = portal_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis connection established");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // OTP store with configured validity window
    let otp_store = OtpStore::with_limits(
        redis_pool.clone(),
        config.otp.ttl_seconds,
        config.otp.max_attempts,
    );

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let refresh_token_repo = Arc::new(PgRefreshTokenRepository::new(pool.clone()));
    let push_subscription_repo = Arc::new(PgPushSubscriptionRepository::new(pool.clone()));
    let news_repo = Arc::new(PgNewsRepository::new(pool.clone()));
    let toolbox_talk_repo = Arc::new(PgToolboxTalkRepository::new(pool.clone()));
    let suggestion_repo = Arc::new(PgSuggestionRepository::new(pool.clone()));
    let contact_repo = Arc::new(PgContactRepository::new(pool.clone()));
    let app_link_repo = Arc::new(PgAppLinkRepository::new(pool.clone()));
    let it_tip_repo = Arc::new(PgItTipRepository::new(pool.clone()));
    let executive_message_repo = Arc::new(PgExecutiveMessageRepository::new(pool.clone()));
    let settings_repo = Arc::new(PgCompanySettingsRepository::new(pool.clone()));

    // SMS: real client when configured, logging fallback otherwise
    let sms_sender: Arc<dyn SmsSender> = match config.sms.clone() {
        Some(sms_config) => Arc::new(HttpSmsClient::new(sms_config)),
        None => {
            warn!("SMS credentials not configured; one-time codes will be logged");
            Arc::new(LoggingSmsSender)
        }
    };

    // Build service context
    let mut builder = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(redis_pool)
        .user_repo(user_repo)
        .refresh_token_repo(refresh_token_repo)
        .push_subscription_repo(push_subscription_repo.clone())
        .news_repo(news_repo)
        .toolbox_talk_repo(toolbox_talk_repo)
        .suggestion_repo(suggestion_repo)
        .contact_repo(contact_repo)
        .app_link_repo(app_link_repo)
        .it_tip_repo(it_tip_repo)
        .executive_message_repo(executive_message_repo)
        .settings_repo(settings_repo)
        .otp_store(otp_store)
        .sms_sender(sms_sender)
        .jwt_service(jwt_service)
        .jwt_config(config.jwt.clone());

    // Push: broadcaster only exists when VAPID keys are configured
    match config.push.clone() {
        Some(push_config) => {
            let sender = Arc::new(WebPushSender::new(&push_config));
            let broadcaster = Arc::new(PushBroadcaster::new(push_subscription_repo, sender));
            builder = builder.push_broadcaster(broadcaster, push_config.public_key);
            info!("Push delivery configured");
        }
        None => {
            warn!("VAPID keys not configured; push delivery disabled");
        }
    }

    let service_context = builder.build().map_err(|e| AppError::Config(e.to_string()))?;

    // Pick up a maintenance gate that survived a restart
    if let Err(e) = CompanyService::new(&service_context)
        .sync_maintenance_flag()
        .await
    {
        warn!(error = %e, "Failed to load persisted maintenance flag");
    }

    spawn_token_sweep(service_context.clone());

    Ok(AppState::new(service_context, config))
}

/// Periodic sweep that physically prunes refresh tokens expired past the
/// grace window
fn spawn_token_sweep(ctx: ServiceContext) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TOKEN_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = AuthService::new(&ctx).prune_expired_tokens().await {
                warn!(error = %e, "Refresh token sweep failed");
            }
        }
    });
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
