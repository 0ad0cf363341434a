//! # portal-cache
//!
//! Redis caching layer for short-lived verification state.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **OTP Storage**: one-time codes with native TTL expiry and atomic
//!   attempt counting
//!
//! ## Example
//!
//! ```ignore
//! use portal_cache::{OtpStore, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let store = OtpStore::new(pool);
//!
//! store.store("233244123456", "123456").await?;
//! let outcome = store.verify("233244123456", "123456").await?;
//! ```

pub mod otp;
pub mod pool;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export OTP types
pub use otp::{OtpOutcome, OtpStore};
