//! # portal-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AppLinkResponse, AuthResponse, CompanySettingsResponse, ContactResponse,
    CreateAppLinkRequest, CreateContactRequest, CreateExecutiveMessageRequest,
    CreateItTipRequest, CreateNewsRequest, CreateSuggestionRequest, CreateToolboxTalkRequest,
    CurrentUserResponse, ExecutiveMessageResponse, HealthResponse, ItTipResponse,
    NewsArticleResponse, OtpRequestedResponse, PageMeta, PaginatedResponse, PublicKeyResponse,
    ReadinessResponse, RefreshTokenRequest, RequestOtpRequest, LogoutRequest,
    SubscribeRequest, SubscriptionKeys, SuggestionResponse, ToolboxTalkResponse,
    UnsubscribeRequest, UpdateAppLinkRequest, UpdateCompanySettingsRequest,
    UpdateContactRequest, UpdateExecutiveMessageRequest, UpdateItTipRequest, UpdateNewsRequest,
    UpdateProfileRequest, UpdateSuggestionStatusRequest, UpdateToolboxTalkRequest,
    VerifyOtpRequest,
};
pub use services::{
    AppLinkService, AuthService, CompanyService, ContactService, ExecutiveMessageService,
    ItTipService, NewsService, PushService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SuggestionService, ToolboxTalkService, UserService,
};
