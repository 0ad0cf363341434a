//! Data transfer objects for API requests and responses

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateAppLinkRequest, CreateContactRequest, CreateExecutiveMessageRequest,
    CreateItTipRequest, CreateNewsRequest, CreateSuggestionRequest, CreateToolboxTalkRequest,
    LogoutRequest, RefreshTokenRequest, RequestOtpRequest, SubscribeRequest, SubscriptionKeys,
    UnsubscribeRequest, UpdateAppLinkRequest, UpdateCompanySettingsRequest,
    UpdateContactRequest, UpdateExecutiveMessageRequest, UpdateItTipRequest, UpdateNewsRequest,
    UpdateProfileRequest, UpdateSuggestionStatusRequest, UpdateToolboxTalkRequest,
    VerifyOtpRequest,
};
pub use responses::{
    AppLinkResponse, AuthResponse, CompanySettingsResponse, ContactResponse,
    CurrentUserResponse, ExecutiveMessageResponse, HealthResponse, ItTipResponse,
    NewsArticleResponse, OtpRequestedResponse, PageMeta, PaginatedResponse, PublicKeyResponse,
    ReadinessResponse, SuggestionResponse, ToolboxTalkResponse,
};
