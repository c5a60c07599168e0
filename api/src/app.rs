//! Application state and factory
//!
//! This module wires middleware and routes into the Actix-web
//! application. Protected routes carry the `JwtAuth` wrapper; role and
//! self checks run inside the handlers through the access policy, which
//! can only be invoked with the verified identity the middleware
//! produced.

use std::sync::Arc;

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};

use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{auth, properties, users, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, P>(
    app_state: web::Data<AppState<U, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    // The token service is registered on its own so the auth middleware
    // can reach it without knowing the repository type parameters.
    let token_service = web::Data::new(Arc::clone(&app_state.tokens));

    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(token_service)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/", web::get().to(health_check))
        // Token issuance
        .route("/jwt", web::post().to(auth::issue_token::<U, P>))
        // User registration (public, idempotent)
        .route("/users", web::post().to(users::register::<U, P>))
        // Admin user management
        .route(
            "/users",
            web::get().to(users::list_users::<U, P>).wrap(JwtAuth::new()),
        )
        .route(
            "/users/{id}",
            web::delete()
                .to(users::delete_user::<U, P>)
                .wrap(JwtAuth::new()),
        )
        // Self role checks
        .route(
            "/users/admin/{email}",
            web::get().to(users::check_admin::<U, P>).wrap(JwtAuth::new()),
        )
        .route(
            "/users/agent/{email}",
            web::get().to(users::check_agent::<U, P>).wrap(JwtAuth::new()),
        )
        // Role grants
        .route(
            "/users/admin/{id}",
            web::patch().to(users::grant_admin::<U, P>).wrap(JwtAuth::new()),
        )
        .route(
            "/users/agent/{id}",
            web::patch().to(users::grant_agent::<U, P>).wrap(JwtAuth::new()),
        )
        // Listing submission and agent listings
        .route(
            "/add/properties",
            web::post()
                .to(properties::submit_property::<U, P>)
                .wrap(JwtAuth::new()),
        )
        .route(
            "/agent-properties",
            web::get()
                .to(properties::agent_properties::<U, P>)
                .wrap(JwtAuth::new()),
        )
        // Admin lifecycle transitions
        .route(
            "/verify/property/{id}",
            web::patch()
                .to(properties::verify_property::<U, P>)
                .wrap(JwtAuth::new()),
        )
        .route(
            "/reject/property/{id}",
            web::patch()
                .to(properties::reject_property::<U, P>)
                .wrap(JwtAuth::new()),
        )
        .route(
            "/add-advertise/property/{id}",
            web::patch()
                .to(properties::advertise_property::<U, P>)
                .wrap(JwtAuth::new()),
        )
        .route(
            "/remove-advertise/property/{id}",
            web::patch()
                .to(properties::unadvertise_property::<U, P>)
                .wrap(JwtAuth::new()),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bengal-breeze-api",
        "message": "BengalBreeze server is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
