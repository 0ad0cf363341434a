//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. These are the
//! transport serializations of the domain entities - IDs go out as strings
//! for JavaScript compatibility and internal fields never leave the server.

use chrono::{DateTime, NaiveDate, Utc};
use portal_core::{SuggestionStatus, UserRole};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with offset pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: i64) -> Self {
        Self {
            data,
            pagination: PageMeta {
                page,
                per_page,
                total,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    /// Total rows matching the query across all pages
    pub total: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Outcome of an OTP request
#[derive(Debug, Serialize)]
pub struct OtpRequestedResponse {
    /// Canonical phone the code was issued for
    pub phone: String,
    /// Seconds until the code expires
    pub expires_in: u64,
    /// "sent" when the gateway accepted the message, "logged" in dev fallback
    pub delivery: &'static str,
}

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub role: UserRole,
    pub phone_verified: bool,
    pub login_count: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Push Responses
// ============================================================================

/// VAPID public key for browser subscription
#[derive(Debug, Serialize)]
pub struct PublicKeyResponse {
    pub public_key: String,
}

// ============================================================================
// Content Responses
// ============================================================================

/// News article response
#[derive(Debug, Clone, Serialize)]
pub struct NewsArticleResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Toolbox talk response
#[derive(Debug, Clone, Serialize)]
pub struct ToolboxTalkResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub week_of: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// Suggestion response.
///
/// `submitted_by` is only present for non-anonymous submissions.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub id: String,
    pub subject: String,
    pub body: String,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Staff directory entry response
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub sort_order: i32,
}

/// Launcher tile response
#[derive(Debug, Clone, Serialize)]
pub struct AppLinkResponse {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub sort_order: i32,
}

/// IT tip response
#[derive(Debug, Clone, Serialize)]
pub struct ItTipResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// Executive message response
#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveMessageResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub executive_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Portal-wide settings response
#[derive(Debug, Clone, Serialize)]
pub struct CompanySettingsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    pub maintenance_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool, cache: bool) -> Self {
        Self {
            status: if database && cache { "ready" } else { "degraded" },
            database,
            cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response() {
        let response = PaginatedResponse::new(vec![1, 2, 3], 2, 3, 10);
        assert_eq!(response.pagination.page, 2);
        assert_eq!(response.pagination.total, 10);
        assert_eq!(response.data.len(), 3);
    }

    #[test]
    fn test_readiness_degrades() {
        assert_eq!(ReadinessResponse::ready(true, true).status, "ready");
        assert_eq!(ReadinessResponse::ready(true, false).status, "degraded");
    }
}
