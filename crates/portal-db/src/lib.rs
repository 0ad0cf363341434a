//! # portal-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `portal-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! All mutations the domain relies on for correctness are single-row
//! statements keyed by a unique column (`endpoint`, `token_hash`, `phone`),
//! so the database's per-statement atomicity is the only locking needed.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAppLinkRepository, PgCompanySettingsRepository, PgContactRepository,
    PgExecutiveMessageRepository, PgItTipRepository, PgNewsRepository,
    PgPushSubscriptionRepository, PgRefreshTokenRepository, PgSuggestionRepository,
    PgToolboxTalkRepository, PgUserRepository,
};
