//! Role grants (PATCH /users/admin/{id}, PATCH /users/agent/{id})

use actix_web::{web, HttpResponse};

use bb_core::domain::entities::user::UserRole;
use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::dto::user::UserResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::{parse_id, AppState};

/// Handler for PATCH /users/admin/{id}
///
/// Promotes an existing user to admin. Admin only; roles are never
/// self-escalated. Granting a role to a nonexistent id is 404; a
/// grant never materializes a new user document.
pub async fn grant_admin<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    grant(state, auth, path, UserRole::Admin).await
}

/// Handler for PATCH /users/agent/{id}
///
/// Promotes an existing user to agent. Admin only.
pub async fn grant_agent<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    grant(state, auth, path, UserRole::Agent).await
}

async fn grant<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
    role: UserRole,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    if let Err(error) = state.policy.require_role(&auth.identity, UserRole::Admin).await {
        return handle_domain_error(error);
    }

    let id = match parse_id(&path.into_inner()) {
        Ok(id) => id,
        Err(error) => return handle_domain_error(error),
    };

    match state.directory.grant_role(id, role).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
