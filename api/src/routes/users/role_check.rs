//! Self role checks (GET /users/admin/{email}, GET /users/agent/{email})

use actix_web::{web, HttpResponse};

use bb_core::domain::entities::user::UserRole;
use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /users/admin/{email}
///
/// Reports whether the caller is an admin. The path email must match
/// the authenticated identity: one user cannot probe another's status,
/// regardless of their own role.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "admin": true }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing or invalid token
/// - 403 Forbidden: path email differs from the authenticated email
pub async fn check_admin<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let email = path.into_inner();
    if let Err(error) = state.policy.require_self(&auth.identity, &email) {
        return handle_domain_error(error);
    }

    match state.policy.roles().resolve(&email).await {
        Ok(role) => HttpResponse::Ok().json(serde_json::json!({
            "admin": role == UserRole::Admin,
        })),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /users/agent/{email}
///
/// Agent counterpart of [`check_admin`], with the same self-only rule.
pub async fn check_agent<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    let email = path.into_inner();
    if let Err(error) = state.policy.require_self(&auth.identity, &email) {
        return handle_domain_error(error);
    }

    match state.policy.roles().resolve(&email).await {
        Ok(role) => HttpResponse::Ok().json(serde_json::json!({
            "agent": role == UserRole::Agent,
        })),
        Err(error) => handle_domain_error(error),
    }
}
