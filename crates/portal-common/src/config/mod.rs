//! Configuration loading

pub mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    OtpConfig, PushConfig, RateLimitConfig, RedisConfig, ServerConfig, SmsConfig,
};
