//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping
/// the abstraction boundary between domain and infrastructure layers.
/// Absence of a record is a valid answer (`Ok(None)` / `Ok(false)`),
/// never an error; only collaborator I/O failures produce `Err`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// The email is the unique match key and is compared byte-for-byte
    /// (case-sensitive).
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user record for that email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// List all users
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Create a new user
    ///
    /// Callers are expected to have checked for an existing email first;
    /// registration is idempotent at the service layer, not here.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Set the role of an existing user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated user
    /// * `Ok(None)` - No user with that id exists; nothing was written
    /// * `Err(DomainError)` - Storage error occurred
    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<Option<User>, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
