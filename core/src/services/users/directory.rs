//! User registration and administrative management

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Outcome of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// A new user record was created
    Created(User),
    /// The email was already registered; nothing was written
    AlreadyRegistered(User),
}

impl Registration {
    /// The registered user, whether new or pre-existing
    pub fn user(&self) -> &User {
        match self {
            Registration::Created(user) => user,
            Registration::AlreadyRegistered(user) => user,
        }
    }
}

/// User directory backing registration and admin user management
pub struct UserDirectory<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> UserDirectory<U> {
    /// Create a new directory over the user repository
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Register a user by email; idempotent
    ///
    /// A second registration with the same email is a no-op that
    /// reports the existing record, not an error. New users start with
    /// no elevated role; roles are only ever granted by an admin.
    pub async fn register(&self, email: &str, name: Option<String>) -> DomainResult<Registration> {
        if let Some(existing) = self.users.find_by_email(email).await? {
            return Ok(Registration::AlreadyRegistered(existing));
        }

        let user = self.users.create(User::new(email, name)).await?;
        tracing::info!(email, "user registered");
        Ok(Registration::Created(user))
    }

    /// Grant a role to an existing user
    ///
    /// Fails with `NotFound` when the id has no backing record; a role
    /// grant never materializes a partial user document.
    pub async fn grant_role(&self, id: Uuid, role: UserRole) -> DomainResult<User> {
        let user = self
            .users
            .update_role(id, role)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        tracing::info!(id = %id, role = role.as_str(), "role granted");
        Ok(user)
    }

    /// List all users
    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Delete a user by id; `NotFound` when absent
    pub async fn remove(&self, id: Uuid) -> DomainResult<()> {
        if !self.users.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }
        tracing::info!(id = %id, "user deleted");
        Ok(())
    }
}
