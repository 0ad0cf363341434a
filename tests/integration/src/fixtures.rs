//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Generate a unique valid local-format phone number
pub fn unique_phone() -> String {
    // 024 prefix plus a unique 7-digit tail
    format!("024{:07}", unique_suffix() % 10_000_000)
}

/// OTP request
#[derive(Debug, Serialize)]
pub struct RequestOtp {
    pub phone: String,
}

/// OTP verification request
#[derive(Debug, Serialize)]
pub struct VerifyOtp {
    pub phone: String,
    pub code: String,
    pub device_info: Option<String>,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// OTP request outcome
#[derive(Debug, Deserialize)]
pub struct OtpRequested {
    pub phone: String,
    pub expires_in: u64,
    pub delivery: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub phone: String,
    pub role: String,
    pub phone_verified: bool,
}

/// Push subscription request
#[derive(Debug, Serialize)]
pub struct SubscribeRequest {
    pub endpoint: String,
    pub keys: SubscriptionKeys,
}

/// Push subscription keys
#[derive(Debug, Serialize)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

impl SubscribeRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            endpoint: format!("https://push.example.com/sub/{suffix}"),
            keys: SubscriptionKeys {
                p256dh: format!("p256dh-{suffix}"),
                auth: format!("auth-{suffix}"),
            },
        }
    }
}

/// Unsubscribe request
#[derive(Debug, Serialize)]
pub struct UnsubscribeRequest {
    pub endpoint: String,
}

/// Create contact request
#[derive(Debug, Serialize)]
pub struct CreateContact {
    pub full_name: String,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub sort_order: i32,
}

impl CreateContact {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            full_name: format!("Test Contact {suffix}"),
            department: Some("IT".to_string()),
            job_title: Some("Engineer".to_string()),
            phone: Some("0244000000".to_string()),
            email: Some(format!("contact{suffix}@example.com")),
            sort_order: 0,
        }
    }
}

/// Contact response
#[derive(Debug, Deserialize)]
pub struct ContactResponse {
    pub id: String,
    pub full_name: String,
    pub department: Option<String>,
}

/// Create news article request
#[derive(Debug, Serialize)]
pub struct CreateNews {
    pub title: String,
    pub body: String,
    pub category: Option<String>,
    pub publish: bool,
}

impl CreateNews {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Article {suffix}"),
            body: "Body text".to_string(),
            category: Some("general".to_string()),
            publish: false,
        }
    }
}

/// News article response
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    pub id: String,
    pub title: String,
    pub is_published: bool,
}

/// Create suggestion request
#[derive(Debug, Serialize)]
pub struct CreateSuggestion {
    pub subject: String,
    pub body: String,
    pub is_anonymous: bool,
}

impl CreateSuggestion {
    pub fn unique(anonymous: bool) -> Self {
        let suffix = unique_suffix();
        Self {
            subject: format!("Suggestion {suffix}"),
            body: "Please consider this".to_string(),
            is_anonymous: anonymous,
        }
    }
}

/// Suggestion response
#[derive(Debug, Deserialize)]
pub struct SuggestionResponse {
    pub id: String,
    pub subject: String,
    pub is_anonymous: bool,
    pub submitted_by: Option<String>,
    pub status: String,
}

/// Paginated wrapper
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}
