//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token-related errors
///
/// A failed verification is always `Invalid`: expired, tampered, and
/// malformed tokens collapse to the same rejection so a caller probing
/// for near-valid tokens learns nothing from the error kind.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    Invalid,

    #[error("Token generation failed")]
    GenerationFailed,

    #[error("Signing key is not configured")]
    KeyMisconfigured,
}

/// Core domain errors
///
/// The taxonomy the HTTP layer maps from: authentication failures,
/// authorization failures, lifecycle precondition failures, missing
/// resources, and collaborator I/O failures are distinct kinds so
/// clients can branch behavior.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Forbidden access")]
    Forbidden,

    #[error("Invalid transition: {message}")]
    InvalidTransition { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage unavailable: {message}")]
    Storage { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    // Bridge to token errors; surfaces as an authentication failure
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a collaborator I/O failure
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
