//! JWT signing configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// Tokens are stateless bearer tokens with a fixed one-hour validity
/// window; there is no refresh token and no server-side revocation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: String::from("bengal-breeze"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// The secret intentionally has no fallback: an empty secret is a
    /// startup failure in the token service, not a per-request error.
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("ACCESS_TOKEN_SECRET").unwrap_or_default(),
            ..Default::default()
        }
    }
}
