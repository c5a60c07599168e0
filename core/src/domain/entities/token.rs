//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token expiration time (1 hour)
pub const TOKEN_EXPIRY_HOURS: i64 = 1;

/// JWT issuer
pub const JWT_ISSUER: &str = "bengal-breeze";

/// Claims structure for the JWT payload
///
/// Tokens are stateless: the server keeps no record of outstanding
/// tokens and offers no revocation. The claims carry the identity email
/// and nothing about the caller's role; roles are resolved live from
/// the user store on every authorization check, so a role change takes
/// effect on the next check without re-issuing the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the identity email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates new claims for an access token valid for one hour
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(TOKEN_EXPIRY_HOURS);

        Self {
            sub: email.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// The identity email carried by the claims
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }
}
