//! Route handlers grouped by resource.

pub mod auth;
pub mod properties;
pub mod users;

use std::sync::Arc;

use uuid::Uuid;

use bb_core::errors::DomainError;
use bb_core::repositories::{PropertyRepository, UserRepository};
use bb_core::services::access::AccessPolicy;
use bb_core::services::property::PropertyLifecycleService;
use bb_core::services::token::TokenService;
use bb_core::services::users::UserDirectory;

/// Shared application state injected into every handler
pub struct AppState<U, P>
where
    U: UserRepository,
    P: PropertyRepository,
{
    /// Token codec for issuing and verifying bearer tokens
    pub tokens: Arc<TokenService>,
    /// Authorization guards
    pub policy: Arc<AccessPolicy<U>>,
    /// User registration and admin management
    pub directory: Arc<UserDirectory<U>>,
    /// Property lifecycle state machine
    pub lifecycle: Arc<PropertyLifecycleService<P>>,
}

impl<U, P> AppState<U, P>
where
    U: UserRepository,
    P: PropertyRepository,
{
    /// Bundle the services into one state value
    pub fn new(
        tokens: Arc<TokenService>,
        policy: Arc<AccessPolicy<U>>,
        directory: Arc<UserDirectory<U>>,
        lifecycle: Arc<PropertyLifecycleService<P>>,
    ) -> Self {
        Self {
            tokens,
            policy,
            directory,
            lifecycle,
        }
    }
}

/// Parse a path id, mapping malformed input to a validation error
///
/// A malformed id is a 400, not a 404: "not found" is reserved for
/// well-formed ids with no backing record.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::Validation {
        message: format!("invalid id: {}", raw),
    })
}
