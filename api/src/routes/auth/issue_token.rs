//! Token issuance, the login handoff (POST /jwt)

use actix_web::{web, HttpResponse};
use validator::Validate;

use bb_core::errors::DomainError;
use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::dto::auth::{IssueTokenRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /jwt
///
/// Issues a bearer token valid for one hour. The endpoint is the
/// handoff after the client's own sign-in flow; it performs no
/// credential check of its own, only claim signing.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "<jwt>" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or malformed email
pub async fn issue_token<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<IssueTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    if request.validate().is_err() {
        return handle_domain_error(DomainError::Validation {
            message: "a valid email is required".to_string(),
        });
    }

    match state.tokens.issue(&request.email) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => handle_domain_error(error.into()),
    }
}
