//! Authentication utilities - JWT access tokens and opaque refresh tokens

pub mod jwt;
pub mod token;

pub use jwt::{AccessClaims, JwtService, TokenPair};
pub use token::{generate_otp_code, generate_refresh_token, hash_token};
