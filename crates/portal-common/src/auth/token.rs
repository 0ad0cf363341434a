//! Opaque token generation and hashing
//!
//! Refresh tokens are 256-bit random values handed to the client verbatim
//! and stored only as SHA-256 digests, so a database leak does not leak
//! usable credentials. One-time codes are six decimal digits.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::{rngs::OsRng, Rng, RngCore};
use sha2::{Digest, Sha256};

/// Generate a new opaque refresh token (43 URL-safe characters)
#[must_use]
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Digest a token for storage or lookup.
///
/// Deterministic: the same raw token always yields the same digest, which is
/// what makes the unique `token_hash` column usable as a lookup key.
#[must_use]
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

/// Generate a six-digit one-time code, zero-padded
#[must_use]
pub fn generate_otp_code() -> String {
    let code: u32 = OsRng.gen_range(0..1_000_000);
    format!("{code:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_tokens_are_unique() {
        let a = generate_refresh_token();
        let b = generate_refresh_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 43);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let token = generate_refresh_token();
        assert_eq!(hash_token(&token), hash_token(&token));
    }

    #[test]
    fn test_hash_differs_from_token() {
        let token = generate_refresh_token();
        assert_ne!(hash_token(&token), token);
    }

    #[test]
    fn test_otp_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_otp_code();
            assert_eq!(code.len(), 6);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
