//! Idempotent user registration (POST /users)

use actix_web::{web, HttpResponse};
use validator::Validate;

use bb_core::errors::DomainError;
use bb_core::repositories::{PropertyRepository, UserRepository};
use bb_core::services::users::Registration;

use crate::dto::user::{RegisterUserRequest, UserResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /users
///
/// Registers a user on first sign-in. Registration is idempotent: a
/// second request with the same email reports the existing record and
/// writes nothing.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "name": "User" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "user registered", "user": { ... } }
/// ```
pub async fn register<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<RegisterUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    if request.validate().is_err() {
        return handle_domain_error(DomainError::Validation {
            message: "a valid email is required".to_string(),
        });
    }

    let request = request.into_inner();
    match state.directory.register(&request.email, request.name).await {
        Ok(Registration::Created(user)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "user registered",
            "user": UserResponse::from(user),
        })),
        Ok(Registration::AlreadyRegistered(user)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "user already exists",
            "user": UserResponse::from(user),
        })),
        Err(error) => handle_domain_error(error),
    }
}
