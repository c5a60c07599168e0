//! Admin user removal (DELETE /users/{id})

use actix_web::{web, HttpResponse};

use bb_core::domain::entities::user::UserRole;
use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::{parse_id, AppState};

/// Handler for DELETE /users/{id}
///
/// Removes a user record. Admin only.
pub async fn delete_user<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
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

    match state.directory.remove(id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "user deleted",
        })),
        Err(error) => handle_domain_error(error),
    }
}
