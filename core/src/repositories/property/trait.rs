//! Property repository trait defining the interface for listing persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::property::Property;
use crate::errors::DomainError;

/// Repository trait for Property entity persistence operations
///
/// Writes are atomic per document; nothing here spans more than one
/// listing. Lifecycle sequences such as verify-then-advertise are two
/// independent writes and interleavings between them are accepted.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Find a property by unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, DomainError>;

    /// List the properties owned by an agent, matched by email
    async fn find_by_agent_email(&self, email: &str) -> Result<Vec<Property>, DomainError>;

    /// Create a new property
    async fn create(&self, property: Property) -> Result<Property, DomainError>;

    /// Write back an existing property
    ///
    /// # Returns
    /// * `Ok(Some(Property))` - The stored state after the write
    /// * `Ok(None)` - No property with that id exists; nothing was written
    async fn update(&self, property: Property) -> Result<Option<Property>, DomainError>;
}
