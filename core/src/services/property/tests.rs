//! Tests for the property lifecycle state machine

use std::sync::Arc;

use bb_shared::config::JwtConfig;

use crate::domain::entities::property::{PropertyDraft, VerificationStatus};
use crate::errors::DomainError;
use crate::repositories::MockPropertyRepository;
use crate::services::access::AuthenticatedIdentity;
use crate::services::token::TokenService;

use super::PropertyLifecycleService;

fn agent_identity(email: &str) -> AuthenticatedIdentity {
    let tokens = TokenService::new(&JwtConfig::new("lifecycle-test-secret")).unwrap();
    let token = tokens.issue(email).unwrap();
    tokens.verify(&token).unwrap()
}

fn service() -> PropertyLifecycleService<MockPropertyRepository> {
    PropertyLifecycleService::new(Arc::new(MockPropertyRepository::new()))
}

fn draft(title: &str) -> PropertyDraft {
    PropertyDraft {
        title: title.to_string(),
        location: None,
    }
}

#[tokio::test]
async fn test_submit_creates_pending_unadvertised_listing() {
    let service = service();
    let agent = agent_identity("agent@example.com");

    let property = service.submit(&agent, draft("Bungalow")).await.unwrap();

    assert_eq!(property.agent_email, "agent@example.com");
    assert_eq!(property.verification_status, VerificationStatus::Pending);
    assert!(!property.is_advertised);
}

#[tokio::test]
async fn test_verify_twice_is_a_no_op_success() {
    let service = service();
    let agent = agent_identity("agent@example.com");
    let property = service.submit(&agent, draft("Bungalow")).await.unwrap();

    let first = service.verify(property.id).await.unwrap();
    assert_eq!(first.verification_status, VerificationStatus::Verified);

    let second = service.verify(property.id).await.unwrap();
    assert_eq!(second.verification_status, VerificationStatus::Verified);
}

#[tokio::test]
async fn test_advertise_before_verify_is_an_invalid_transition() {
    let service = service();
    let agent = agent_identity("agent@example.com");
    let property = service.submit(&agent, draft("Bungalow")).await.unwrap();

    // Pending: not advertisable yet.
    let err = service.advertise(property.id).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));

    // Verify, then advertising succeeds.
    service.verify(property.id).await.unwrap();
    let advertised = service.advertise(property.id).await.unwrap();
    assert!(advertised.is_advertised);
}

#[tokio::test]
async fn test_advertise_rejected_listing_fails() {
    let service = service();
    let agent = agent_identity("agent@example.com");
    let property = service.submit(&agent, draft("Bungalow")).await.unwrap();

    service.reject(property.id).await.unwrap();
    let err = service.advertise(property.id).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_reject_withdraws_advertisement() {
    let service = service();
    let agent = agent_identity("agent@example.com");
    let property = service.submit(&agent, draft("Bungalow")).await.unwrap();

    service.verify(property.id).await.unwrap();
    service.advertise(property.id).await.unwrap();

    let rejected = service.reject(property.id).await.unwrap();
    assert_eq!(rejected.verification_status, VerificationStatus::Rejected);
    assert!(!rejected.is_advertised);
}

#[tokio::test]
async fn test_unadvertise_is_allowed_from_any_state() {
    let service = service();
    let agent = agent_identity("agent@example.com");
    let property = service.submit(&agent, draft("Bungalow")).await.unwrap();

    // Already not advertised: still a success.
    let untouched = service.unadvertise(property.id).await.unwrap();
    assert!(!untouched.is_advertised);

    service.verify(property.id).await.unwrap();
    service.advertise(property.id).await.unwrap();

    let withdrawn = service.unadvertise(property.id).await.unwrap();
    assert!(!withdrawn.is_advertised);
    assert_eq!(withdrawn.verification_status, VerificationStatus::Verified);
}

#[tokio::test]
async fn test_missing_listing_is_not_found() {
    let service = service();

    let err = service.verify(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let err = service.advertise(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_listings_of_filters_by_identity_email() {
    let service = service();
    let alice = agent_identity("alice@example.com");
    let bob = agent_identity("bob@example.com");

    service.submit(&alice, draft("Flat A")).await.unwrap();
    service.submit(&alice, draft("Flat B")).await.unwrap();
    service.submit(&bob, draft("Cottage")).await.unwrap();

    let mine = service.listings_of(&alice).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|p| p.agent_email == "alice@example.com"));
}
