//! DTOs for token issuance

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /jwt
///
/// The login handoff: the client has already completed its sign-in flow
/// and asks for a bearer token for this email. Extra body fields are
/// accepted and ignored; only the email ends up in the claim.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueTokenRequest {
    /// Identity email to embed in the token claim
    #[validate(email)]
    pub email: String,
}

/// Response body carrying the signed token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token, valid for one hour
    pub token: String,
}
