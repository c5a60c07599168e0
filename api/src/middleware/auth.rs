//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization
//! header, verifies it through the shared `TokenService`, and injects
//! the verified identity into the request. Handlers recover it with the
//! [`AuthContext`] extractor, which fails with 401 when the middleware
//! did not run or rejected the token, so a handler that declares
//! `AuthContext` cannot execute for an unauthenticated request.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use bb_core::errors::DomainError;
use bb_core::services::access::AuthenticatedIdentity;
use bb_core::services::token::TokenService;

use crate::handlers::error::domain_error_response;

/// Verified identity context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The verified identity from the bearer token
    pub identity: AuthenticatedIdentity,
}

impl AuthContext {
    /// The verified identity email
    pub fn email(&self) -> &str {
        self.identity.email()
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthenticated()),
            };

            let tokens = match req.app_data::<web::Data<Arc<TokenService>>>() {
                Some(tokens) => tokens,
                None => {
                    log::error!("TokenService missing from app data");
                    return Err(unauthenticated());
                }
            };

            // Expired, tampered, and malformed tokens are all the same
            // rejection; nothing about near-validity leaks to a caller.
            let identity = match tokens.verify(&token) {
                Ok(identity) => identity,
                Err(_) => return Err(unauthenticated()),
            };

            req.extensions_mut().insert(AuthContext { identity });

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// A 401 rejection carrying the standard error body
fn unauthenticated() -> Error {
    let response = domain_error_response(&DomainError::Unauthenticated);
    InternalError::from_response(DomainError::Unauthenticated, response).into()
}

/// Extractor for the verified identity context
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(unauthenticated);

        ready(result)
    }
}
