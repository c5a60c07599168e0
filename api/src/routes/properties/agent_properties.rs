//! The requesting agent's own listings (GET /agent-properties)

use actix_web::{web, HttpResponse};

use bb_core::domain::entities::user::UserRole;
use bb_core::errors::DomainError;
use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::dto::property::{AgentPropertiesQuery, PropertyResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /agent-properties
///
/// Returns the listings owned by the authenticated agent. The filter
/// email derives strictly from the verified identity; a client-supplied
/// `?email=` naming someone else is rejected with 403 rather than
/// trusted.
pub async fn agent_properties<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    query: web::Query<AgentPropertiesQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    if let Err(error) = state.policy.require_role(&auth.identity, UserRole::Agent).await {
        return handle_domain_error(error);
    }

    if let Some(requested) = query.email.as_deref() {
        if requested != auth.email() {
            return handle_domain_error(DomainError::Forbidden);
        }
    }

    match state.lifecycle.listings_of(&auth.identity).await {
        Ok(properties) => HttpResponse::Ok().json(
            properties
                .into_iter()
                .map(PropertyResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}
