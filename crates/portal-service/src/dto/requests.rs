//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user-entered
//! fields also implement `Validate` for input validation. Phone numbers are
//! only length-checked here - canonical normalization and validation happen
//! in the domain layer so every code path shares one definition.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Request a one-time login code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RequestOtpRequest {
    #[validate(length(min = 9, max = 20, message = "Phone number must be 9-20 characters"))]
    pub phone: String,
}

/// Verify a one-time code and log in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 9, max = 20, message = "Phone number must be 9-20 characters"))]
    pub phone: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,

    /// Free-form client description (browser, OS) stored with the session
    #[validate(length(max = 256, message = "Device info must be at most 256 characters"))]
    pub device_info: Option<String>,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke; revokes all when absent)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user profile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 100, message = "Department must be at most 100 characters"))]
    pub department: Option<String>,
}

// ============================================================================
// Push Requests
// ============================================================================

/// Client key material from the browser's PushSubscription
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscriptionKeys {
    #[validate(length(min = 1, message = "p256dh key is required"))]
    pub p256dh: String,

    #[validate(length(min = 1, message = "auth secret is required"))]
    pub auth: String,
}

/// Register a browser push subscription
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(url(message = "Endpoint must be a valid URL"))]
    pub endpoint: String,

    #[validate(nested)]
    pub keys: SubscriptionKeys,
}

/// Remove a browser push subscription
#[derive(Debug, Clone, Deserialize)]
pub struct UnsubscribeRequest {
    pub endpoint: String,
}

// ============================================================================
// News Requests
// ============================================================================

/// Create news article request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    /// Publish immediately (triggers the push broadcast)
    #[serde(default)]
    pub publish: bool,
}

/// Update news article request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub body: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    pub publish: Option<bool>,
}

// ============================================================================
// Toolbox Talk Requests
// ============================================================================

/// Create toolbox talk request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateToolboxTalkRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(max = 100, message = "Topic must be at most 100 characters"))]
    pub topic: Option<String>,

    /// Week the talk is scheduled for
    pub week_of: NaiveDate,

    #[validate(url(message = "Attachment URL must be a valid URL"))]
    pub attachment_url: Option<String>,

    #[serde(default)]
    pub publish: bool,
}

/// Update toolbox talk request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateToolboxTalkRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub content: Option<String>,

    #[validate(length(max = 100, message = "Topic must be at most 100 characters"))]
    pub topic: Option<String>,

    pub week_of: Option<NaiveDate>,

    #[validate(url(message = "Attachment URL must be a valid URL"))]
    pub attachment_url: Option<String>,

    pub publish: Option<bool>,
}

// ============================================================================
// Suggestion Requests
// ============================================================================

/// Submit a suggestion
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSuggestionRequest {
    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Body must be 1-5000 characters"))]
    pub body: String,

    #[serde(default)]
    pub is_anonymous: bool,
}

/// Move a suggestion through its review workflow
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSuggestionStatusRequest {
    pub status: portal_core::SuggestionStatus,
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Create staff directory entry
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(length(max = 100, message = "Department must be at most 100 characters"))]
    pub department: Option<String>,

    #[validate(length(max = 100, message = "Job title must be at most 100 characters"))]
    pub job_title: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default)]
    pub sort_order: i32,
}

/// Update staff directory entry
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 100, message = "Department must be at most 100 characters"))]
    pub department: Option<String>,

    #[validate(length(max = 100, message = "Job title must be at most 100 characters"))]
    pub job_title: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub sort_order: Option<i32>,
}

// ============================================================================
// App Link Requests
// ============================================================================

/// Create launcher tile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppLinkRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(url(message = "URL must be valid"))]
    pub url: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Icon URL must be valid"))]
    pub icon_url: Option<String>,

    #[serde(default)]
    pub sort_order: i32,
}

/// Update launcher tile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAppLinkRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(url(message = "URL must be valid"))]
    pub url: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Icon URL must be valid"))]
    pub icon_url: Option<String>,

    pub sort_order: Option<i32>,
}

// ============================================================================
// IT Tip Requests
// ============================================================================

/// Create IT tip
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItTipRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[serde(default)]
    pub publish: bool,
}

/// Update IT tip
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateItTipRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub content: Option<String>,

    pub publish: Option<bool>,
}

// ============================================================================
// Executive Message Requests
// ============================================================================

/// Create executive message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExecutiveMessageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    #[validate(length(min = 1, max = 100, message = "Executive name must be 1-100 characters"))]
    pub executive_name: String,

    #[validate(length(max = 100, message = "Executive title must be at most 100 characters"))]
    pub executive_title: Option<String>,
}

/// Update executive message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateExecutiveMessageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub body: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Executive name must be 1-100 characters"))]
    pub executive_name: Option<String>,

    #[validate(length(max = 100, message = "Executive title must be at most 100 characters"))]
    pub executive_title: Option<String>,

    pub is_active: Option<bool>,
}

// ============================================================================
// Company Settings Requests
// ============================================================================

/// Update portal-wide settings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCompanySettingsRequest {
    #[validate(length(max = 10_000, message = "About must be at most 10000 characters"))]
    pub about: Option<String>,

    #[validate(length(max = 2000, message = "Mission must be at most 2000 characters"))]
    pub mission: Option<String>,

    #[validate(length(max = 2000, message = "Vision must be at most 2000 characters"))]
    pub vision: Option<String>,

    pub maintenance_mode: Option<bool>,
}
