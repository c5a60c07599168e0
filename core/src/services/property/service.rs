//! Property lifecycle state machine over the property store

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::property::{Property, PropertyDraft};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PropertyRepository;
use crate::services::access::AuthenticatedIdentity;

/// Drives verification and advertisement transitions on listings
///
/// Every operation reads the current document, applies one transition,
/// and writes that single document back. Transitions are idempotent;
/// re-applying one is a no-op success. A verify-then-advertise sequence
/// is two independent writes; a concurrent admin may interleave, and
/// the later read reflects the latest write.
pub struct PropertyLifecycleService<P: PropertyRepository> {
    properties: Arc<P>,
}

impl<P: PropertyRepository> PropertyLifecycleService<P> {
    /// Create a new lifecycle service over the property repository
    pub fn new(properties: Arc<P>) -> Self {
        Self { properties }
    }

    /// Submit a new listing owned by the authenticated agent
    ///
    /// The owner email comes from the verified identity, never from the
    /// request body, and the created listing is always pending and not
    /// advertised no matter what the client sent.
    pub async fn submit(
        &self,
        agent: &AuthenticatedIdentity,
        draft: PropertyDraft,
    ) -> DomainResult<Property> {
        let property = Property::new(agent.email(), draft);
        let property = self.properties.create(property).await?;
        tracing::info!(id = %property.id, agent = %property.agent_email, "listing submitted");
        Ok(property)
    }

    /// Mark a listing verified; no-op when already verified
    pub async fn verify(&self, id: Uuid) -> DomainResult<Property> {
        let mut property = self.load(id).await?;
        if property.verify() {
            property = self.store(property).await?;
            tracing::info!(id = %id, "listing verified");
        }
        Ok(property)
    }

    /// Mark a listing rejected; withdraws any advertisement
    pub async fn reject(&self, id: Uuid) -> DomainResult<Property> {
        let mut property = self.load(id).await?;
        if property.reject() {
            property = self.store(property).await?;
            tracing::info!(id = %id, "listing rejected");
        }
        Ok(property)
    }

    /// Advertise a verified listing
    ///
    /// Fails with `InvalidTransition` on a pending or rejected listing,
    /// distinct from authorization failures, so a caller can tell
    /// "not right now" from "never".
    pub async fn advertise(&self, id: Uuid) -> DomainResult<Property> {
        let mut property = self.load(id).await?;
        if property.advertise()? {
            property = self.store(property).await?;
            tracing::info!(id = %id, "listing advertised");
        }
        Ok(property)
    }

    /// Withdraw a listing from advertisement; allowed from any state
    pub async fn unadvertise(&self, id: Uuid) -> DomainResult<Property> {
        let mut property = self.load(id).await?;
        if property.unadvertise() {
            property = self.store(property).await?;
            tracing::info!(id = %id, "listing advertisement withdrawn");
        }
        Ok(property)
    }

    /// Listings owned by the authenticated agent
    ///
    /// The filter email derives strictly from the verified identity.
    pub async fn listings_of(&self, agent: &AuthenticatedIdentity) -> DomainResult<Vec<Property>> {
        self.properties.find_by_agent_email(agent.email()).await
    }

    async fn load(&self, id: Uuid) -> DomainResult<Property> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }

    async fn store(&self, property: Property) -> DomainResult<Property> {
        self.properties
            .update(property)
            .await?
            .ok_or_else(|| DomainError::not_found("Property"))
    }
}
