//! Maps domain errors to HTTP responses.
//!
//! The whole error taxonomy is mapped in one place so every route
//! reports the same shape: authentication failures are 401,
//! authorization failures 403, lifecycle precondition failures 409,
//! missing resources 404, store failures 503, and malformed input 400.
//! Lifecycle failures are deliberately distinct from authorization
//! failures so a client can tell "not right now" from "never".

use actix_web::{http::StatusCode, HttpResponse};

use bb_core::errors::DomainError;

use crate::dto::{ErrorBody, ErrorBodyExt};

/// Build the HTTP response for a domain error without logging
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let (status, code) = match error {
        DomainError::Unauthenticated | DomainError::Token(_) => {
            (StatusCode::UNAUTHORIZED, "unauthenticated")
        }
        DomainError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
        DomainError::InvalidTransition { .. } => (StatusCode::CONFLICT, "invalid_transition"),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        DomainError::Storage { .. } => (StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable"),
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
    };

    ErrorBody::new(code, error.to_string()).to_response(status)
}

/// Handle a domain error: log it and convert to an HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        // Guard rejections are routine; store failures are not.
        DomainError::Storage { .. } => log::error!("Domain error: {:?}", error),
        _ => log::debug!("Domain error: {:?}", error),
    }

    domain_error_response(&error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_core::errors::TokenError;

    #[test]
    fn test_status_codes_follow_the_taxonomy() {
        let cases = [
            (DomainError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden, StatusCode::FORBIDDEN),
            (
                DomainError::InvalidTransition {
                    message: "x".into(),
                },
                StatusCode::CONFLICT,
            ),
            (DomainError::not_found("User"), StatusCode::NOT_FOUND),
            (
                DomainError::storage("down"),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                DomainError::Validation {
                    message: "bad".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Token(TokenError::Invalid),
                StatusCode::UNAUTHORIZED,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(domain_error_response(&error).status(), expected);
        }
    }
}
