//! One-time code storage in Redis.
//!
//! Codes live under a per-phone key with a native TTL, so expiry is enforced
//! by the store itself. A parallel attempt counter (same TTL) caps how many
//! guesses a caller gets before the code is burned.

use crate::pool::{RedisPool, RedisResult};

/// Key prefix for one-time codes
const OTP_PREFIX: &str = "otp:";

/// Key prefix for verification attempt counters
const OTP_ATTEMPTS_PREFIX: &str = "otp_attempts:";

/// Default validity window (5 minutes)
const DEFAULT_OTP_TTL: u64 = 300;

/// Default verification attempts before the code is invalidated
const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Outcome of a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpOutcome {
    /// Code matched and has been consumed
    Verified,
    /// A code exists for the phone but the guess was wrong
    Mismatch,
    /// No code stored (never requested, expired, or burned by attempts)
    Missing,
}

/// Store for one-time SMS codes
#[derive(Clone)]
pub struct OtpStore {
    pool: RedisPool,
    ttl_seconds: u64,
    max_attempts: u32,
}

impl OtpStore {
    /// Create a new OTP store with default TTL and attempt limit
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_OTP_TTL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create with custom TTL and attempt limit
    #[must_use]
    pub fn with_limits(pool: RedisPool, ttl_seconds: u64, max_attempts: u32) -> Self {
        Self {
            pool,
            ttl_seconds,
            max_attempts,
        }
    }

    /// Validity window in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    fn code_key(phone: &str) -> String {
        format!("{OTP_PREFIX}{phone}")
    }

    fn attempts_key(phone: &str) -> String {
        format!("{OTP_ATTEMPTS_PREFIX}{phone}")
    }

    /// Store a code for a phone, replacing any outstanding one.
    ///
    /// The attempt counter is reset along with the code.
    pub async fn store(&self, phone: &str, code: &str) -> RedisResult<()> {
        let code_key = Self::code_key(phone);
        let attempts_key = Self::attempts_key(phone);

        self.pool.delete(&[attempts_key.as_str()]).await?;
        self.pool.set_ex(&code_key, code, self.ttl_seconds).await?;

        tracing::debug!(phone = %phone, ttl = self.ttl_seconds, "Stored one-time code");
        Ok(())
    }

    /// Verify a guess against the stored code.
    ///
    /// A matching guess consumes the code (single use). Exhausting the
    /// attempt limit burns the code, after which the outcome is `Missing`.
    pub async fn verify(&self, phone: &str, code: &str) -> RedisResult<OtpOutcome> {
        let code_key = Self::code_key(phone);
        let attempts_key = Self::attempts_key(phone);

        let Some(stored) = self.pool.get_value(&code_key).await? else {
            return Ok(OtpOutcome::Missing);
        };

        let attempts = self
            .pool
            .incr_with_ttl(&attempts_key, self.ttl_seconds)
            .await?;
        if attempts > i64::from(self.max_attempts) {
            self.pool
                .delete(&[code_key.as_str(), attempts_key.as_str()])
                .await?;
            tracing::warn!(phone = %phone, "One-time code burned after too many attempts");
            return Ok(OtpOutcome::Missing);
        }

        if stored != code {
            return Ok(OtpOutcome::Mismatch);
        }

        self.pool
            .delete(&[code_key.as_str(), attempts_key.as_str()])
            .await?;
        tracing::debug!(phone = %phone, "One-time code verified");
        Ok(OtpOutcome::Verified)
    }

    /// Drop any outstanding code for a phone
    pub async fn invalidate(&self, phone: &str) -> RedisResult<()> {
        let code_key = Self::code_key(phone);
        let attempts_key = Self::attempts_key(phone);
        self.pool
            .delete(&[code_key.as_str(), attempts_key.as_str()])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        assert_eq!(OtpStore::code_key("233244123456"), "otp:233244123456");
        assert_eq!(
            OtpStore::attempts_key("233244123456"),
            "otp_attempts:233244123456"
        );
    }
}
