//! Connection tokens for the call service handshake.
//!
//! The app only signs tokens; validating and decoding them is the call
//! service's job.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Tokens are accepted for one hour...
pub const TOKEN_TTL_SECS: i64 = 60 * 60;
/// ...starting one minute before issuance, to absorb client clock skew.
pub const CLOCK_SKEW_SECS: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Identity this token lets connect.
    pub user_id: String,
    /// Issued-at, backdated by the skew allowance (Unix epoch).
    pub iat: i64,
    /// Expiration (Unix epoch).
    pub exp: i64,
}

/// Sign a connection token for `user_id` with the call service API secret.
pub fn issue(secret: &str, user_id: &str) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        user_id: user_id.to_string(),
        iat: now - CLOCK_SKEW_SECS,
        exp: now + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::External(format!("Token signing failed: {e}")))
}
