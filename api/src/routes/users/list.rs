//! Admin user listing (GET /users)

use actix_web::{web, HttpResponse};

use bb_core::domain::entities::user::UserRole;
use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::dto::user::UserResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /users
///
/// Lists every registered user. Admin only.
pub async fn list_users<U, P>(state: web::Data<AppState<U, P>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    if let Err(error) = state.policy.require_role(&auth.identity, UserRole::Admin).await {
        return handle_domain_error(error);
    }

    match state.directory.list().await {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}
