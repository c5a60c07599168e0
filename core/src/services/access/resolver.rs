//! Live role resolution against the user store

use std::sync::Arc;

use crate::domain::entities::user::UserRole;
use crate::errors::DomainResult;
use crate::repositories::UserRepository;

/// Resolves the current role for an identity email
///
/// Every call is a fresh single-key lookup; nothing is memoized. The
/// token carries no role, so a role change in the store takes effect on
/// the very next check. Absence of a user record, including a record
/// deleted after the token was issued, resolves to `UserRole::None`,
/// never an error.
pub struct RoleResolver<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> Clone for RoleResolver<U> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<U: UserRepository> RoleResolver<U> {
    /// Create a new resolver over the user repository
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Look up the current role for `email`
    pub async fn resolve(&self, email: &str) -> DomainResult<UserRole> {
        let role = self
            .users
            .find_by_email(email)
            .await?
            .map(|user| user.role)
            .unwrap_or(UserRole::None);

        tracing::debug!(email, role = role.as_str(), "resolved role");
        Ok(role)
    }
}
