use std::sync::Arc;

use crate::domain::entities::user::{User, UserRole};
use crate::repositories::MockUserRepository;
use crate::services::access::RoleResolver;

#[tokio::test]
async fn test_resolve_unknown_email_is_none_not_an_error() {
    let resolver = RoleResolver::new(Arc::new(MockUserRepository::new()));

    let role = resolver.resolve("ghost@example.com").await.unwrap();
    assert_eq!(role, UserRole::None);
}

#[tokio::test]
async fn test_resolve_returns_stored_role() {
    let users = Arc::new(MockUserRepository::new());
    let mut admin = User::new("root@example.com", None);
    admin.set_role(UserRole::Admin);
    users.insert(admin).await;

    let resolver = RoleResolver::new(users);
    assert_eq!(
        resolver.resolve("root@example.com").await.unwrap(),
        UserRole::Admin
    );
}

#[tokio::test]
async fn test_resolve_is_case_sensitive() {
    let users = Arc::new(MockUserRepository::new());
    let mut agent = User::new("Agent@Example.com", None);
    agent.set_role(UserRole::Agent);
    users.insert(agent).await;

    let resolver = RoleResolver::new(users);
    assert_eq!(
        resolver.resolve("agent@example.com").await.unwrap(),
        UserRole::None
    );
    assert_eq!(
        resolver.resolve("Agent@Example.com").await.unwrap(),
        UserRole::Agent
    );
}

#[tokio::test]
async fn test_deleted_user_resolves_to_none() {
    let users = Arc::new(MockUserRepository::new());
    let mut agent = User::new("gone@example.com", None);
    agent.set_role(UserRole::Agent);
    let id = users.insert(agent).await;

    let resolver = RoleResolver::new(Arc::clone(&users));
    assert_eq!(
        resolver.resolve("gone@example.com").await.unwrap(),
        UserRole::Agent
    );

    use crate::repositories::UserRepository;
    users.delete(id).await.unwrap();

    // A still-valid token for this email is now unprivileged.
    assert_eq!(
        resolver.resolve("gone@example.com").await.unwrap(),
        UserRole::None
    );
}
