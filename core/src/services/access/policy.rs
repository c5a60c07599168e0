//! Composable authorization guards

use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::identity::AuthenticatedIdentity;
use super::resolver::RoleResolver;

/// Authorization guards applied in front of route handlers
///
/// Both checks require an [`AuthenticatedIdentity`], so they can only
/// run after token verification. Rejections short-circuit the request
/// before any handler logic, so a rejected request has no partial side
/// effects.
pub struct AccessPolicy<U: UserRepository> {
    roles: RoleResolver<U>,
}

impl<U: UserRepository> AccessPolicy<U> {
    /// Create a new policy over the role resolver
    pub fn new(roles: RoleResolver<U>) -> Self {
        Self { roles }
    }

    /// Require the identity's CURRENT role to equal `role`
    ///
    /// The role is resolved from the user store on every call; a token
    /// issued before a role change still authenticates, but authorizes
    /// according to the store's present truth.
    pub async fn require_role(
        &self,
        identity: &AuthenticatedIdentity,
        role: UserRole,
    ) -> DomainResult<()> {
        let current = self.roles.resolve(identity.email()).await?;
        if current != role {
            tracing::warn!(
                email = identity.email(),
                required = role.as_str(),
                actual = current.as_str(),
                "role check failed"
            );
            return Err(DomainError::Forbidden);
        }
        Ok(())
    }

    /// Require the identity to be the subject it is asking about
    ///
    /// Prevents one authenticated user from querying another's role or
    /// admin status. The comparison is byte-for-byte, matching the
    /// user store's case-sensitive email key.
    pub fn require_self(&self, identity: &AuthenticatedIdentity, email: &str) -> DomainResult<()> {
        if identity.email() != email {
            return Err(DomainError::Forbidden);
        }
        Ok(())
    }

    /// The underlying role resolver
    pub fn roles(&self) -> &RoleResolver<U> {
        &self.roles
    }
}
