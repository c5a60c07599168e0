//! Listing submission (POST /add/properties)

use actix_web::{web, HttpResponse};
use validator::Validate;

use bb_core::domain::entities::user::UserRole;
use bb_core::errors::DomainError;
use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::dto::property::{PropertyResponse, SubmitPropertyRequest};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for POST /add/properties
///
/// Submits a new listing for the authenticated agent. The owner email
/// is the verified identity's email, never taken from the body, and
/// the listing starts pending and not advertised.
///
/// # Request Body
///
/// ```json
/// { "title": "Lakeside flat", "location": "Dhaka" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty title
/// - 401 Unauthorized: missing or invalid token
/// - 403 Forbidden: the caller is not an agent
pub async fn submit_property<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    request: web::Json<SubmitPropertyRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    if let Err(error) = state.policy.require_role(&auth.identity, UserRole::Agent).await {
        return handle_domain_error(error);
    }

    if request.validate().is_err() {
        return handle_domain_error(DomainError::Validation {
            message: "a listing title is required".to_string(),
        });
    }

    match state
        .lifecycle
        .submit(&auth.identity, request.into_inner().into())
        .await
    {
        Ok(property) => HttpResponse::Ok().json(PropertyResponse::from(property)),
        Err(error) => handle_domain_error(error),
    }
}
