//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    app_links, auth, company, contacts, executive_messages, health, it_tips, news, push,
    suggestions, toolbox_talks, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(push_routes())
        .merge(news_routes())
        .merge(toolbox_talk_routes())
        .merge(suggestion_routes())
        .merge(contact_routes())
        .merge(app_link_routes())
        .merge(it_tip_routes())
        .merge(executive_message_routes())
        .merge(company_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/otp/request", post(auth::request_otp))
        .route("/auth/otp/verify", post(auth::verify_otp))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
}

/// Push subscription routes
fn push_routes() -> Router<AppState> {
    Router::new()
        .route("/push/public-key", get(push::public_key))
        .route("/push/subscribe", post(push::subscribe))
        .route("/push/unsubscribe", post(push::unsubscribe))
}

/// News routes
fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(news::list_news))
        .route("/news", post(news::create_article))
        .route("/news/:article_id", get(news::get_article))
        .route("/news/:article_id", patch(news::update_article))
        .route("/news/:article_id", delete(news::delete_article))
}

/// Toolbox talk routes
fn toolbox_talk_routes() -> Router<AppState> {
    Router::new()
        .route("/toolbox-talks", get(toolbox_talks::list_talks))
        .route("/toolbox-talks", post(toolbox_talks::create_talk))
        .route("/toolbox-talks/:talk_id", get(toolbox_talks::get_talk))
        .route("/toolbox-talks/:talk_id", patch(toolbox_talks::update_talk))
        .route("/toolbox-talks/:talk_id", delete(toolbox_talks::delete_talk))
}

/// Suggestion box routes
fn suggestion_routes() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(suggestions::create_suggestion))
        .route("/suggestions", get(suggestions::list_suggestions))
        .route("/suggestions/:suggestion_id", get(suggestions::get_suggestion))
        .route(
            "/suggestions/:suggestion_id/status",
            patch(suggestions::update_suggestion_status),
        )
        .route(
            "/suggestions/:suggestion_id",
            delete(suggestions::delete_suggestion),
        )
}

/// Staff directory routes
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(contacts::list_contacts))
        .route("/contacts", post(contacts::create_contact))
        .route("/contacts/:contact_id", get(contacts::get_contact))
        .route("/contacts/:contact_id", patch(contacts::update_contact))
        .route("/contacts/:contact_id", delete(contacts::delete_contact))
}

/// App launcher routes
fn app_link_routes() -> Router<AppState> {
    Router::new()
        .route("/app-links", get(app_links::list_app_links))
        .route("/app-links", post(app_links::create_app_link))
        .route("/app-links/:link_id", patch(app_links::update_app_link))
        .route("/app-links/:link_id", delete(app_links::delete_app_link))
}

/// IT tip routes
fn it_tip_routes() -> Router<AppState> {
    Router::new()
        .route("/it-tips", get(it_tips::list_tips))
        .route("/it-tips", post(it_tips::create_tip))
        .route("/it-tips/:tip_id", get(it_tips::get_tip))
        .route("/it-tips/:tip_id", patch(it_tips::update_tip))
        .route("/it-tips/:tip_id", delete(it_tips::delete_tip))
}

/// Executive message routes
fn executive_message_routes() -> Router<AppState> {
    Router::new()
        .route("/executive-messages", get(executive_messages::list_messages))
        .route("/executive-messages", post(executive_messages::create_message))
        .route(
            "/executive-messages/:message_id",
            get(executive_messages::get_message),
        )
        .route(
            "/executive-messages/:message_id",
            patch(executive_messages::update_message),
        )
        .route(
            "/executive-messages/:message_id",
            delete(executive_messages::delete_message),
        )
}

/// Company settings routes
fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/company/settings", get(company::get_settings))
        .route("/company/settings", patch(company::update_settings))
}
