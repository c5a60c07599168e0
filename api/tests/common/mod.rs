//! Shared fixtures for API integration tests

use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use bb_api::routes::AppState;
use bb_core::domain::entities::property::PropertyDraft;
use bb_core::domain::entities::user::{User, UserRole};
use bb_core::repositories::{MockPropertyRepository, MockUserRepository};
use bb_core::services::access::{AccessPolicy, RoleResolver};
use bb_core::services::property::PropertyLifecycleService;
use bb_core::services::token::TokenService;
use bb_core::services::users::UserDirectory;
use bb_shared::config::JwtConfig;

/// Everything a test needs: the app state plus handles to the
/// underlying mocks for seeding and direct mutation.
pub struct TestContext {
    pub state: web::Data<AppState<MockUserRepository, MockPropertyRepository>>,
    pub users: Arc<MockUserRepository>,
    pub tokens: Arc<TokenService>,
}

pub fn context() -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let properties = Arc::new(MockPropertyRepository::new());
    let tokens =
        Arc::new(TokenService::new(&JwtConfig::new("api-test-secret")).unwrap());

    let state = web::Data::new(AppState::new(
        Arc::clone(&tokens),
        Arc::new(AccessPolicy::new(RoleResolver::new(Arc::clone(&users)))),
        Arc::new(UserDirectory::new(Arc::clone(&users))),
        Arc::new(PropertyLifecycleService::new(properties)),
    ));

    TestContext {
        state,
        users,
        tokens,
    }
}

impl TestContext {
    /// Seed a user with the given role, returning its id
    pub async fn seed_user(&self, email: &str, role: UserRole) -> Uuid {
        let mut user = User::new(email, None);
        user.set_role(role);
        self.users.insert(user).await
    }

    /// An Authorization header value for the given email
    pub fn bearer(&self, email: &str) -> String {
        format!("Bearer {}", self.tokens.issue(email).unwrap())
    }

    /// Seed a pending listing for the given agent, returning its id
    pub async fn seed_listing(&self, agent: &str) -> String {
        let token = self.tokens.issue(agent).unwrap();
        let identity = self.tokens.verify(&token).unwrap();
        let property = self
            .state
            .lifecycle
            .submit(
                &identity,
                PropertyDraft {
                    title: "Lakeside flat".to_string(),
                    location: Some("Dhaka".to_string()),
                },
            )
            .await
            .unwrap();
        property.id.to_string()
    }
}
