//! Verified per-request identity

use crate::domain::entities::token::Claims;

/// The decoded claim of a verified bearer token
///
/// Fields are private and the only constructor is crate-internal,
/// reserved for the token service: a value of this type is proof that
/// `TokenService::verify` accepted the caller's token. Holding one says
/// nothing about roles; those are resolved freshly on every check.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    claims: Claims,
}

impl AuthenticatedIdentity {
    /// Wrap claims that already passed signature and expiry validation
    pub(crate) fn from_verified_claims(claims: Claims) -> Self {
        Self { claims }
    }

    /// The verified identity email
    pub fn email(&self) -> &str {
        self.claims.email()
    }

    /// The full verified claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}
