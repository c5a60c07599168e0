//! Admin lifecycle routes: verify, reject, advertise, unadvertise
//!
//! All four share the same shape: admin-only guard, well-formed id,
//! then one state machine transition. Transitions are idempotent, so
//! admins may safely retry; only `advertise` has a precondition and
//! reports 409 when the listing is not verified.

use actix_web::{web, HttpResponse};

use bb_core::domain::entities::user::UserRole;
use bb_core::repositories::{PropertyRepository, UserRepository};

use crate::dto::property::PropertyResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::{parse_id, AppState};

#[derive(Debug, Clone, Copy)]
enum LifecycleOp {
    Verify,
    Reject,
    Advertise,
    Unadvertise,
}

/// Handler for PATCH /verify/property/{id}
pub async fn verify_property<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    transition(state, auth, path, LifecycleOp::Verify).await
}

/// Handler for PATCH /reject/property/{id}
pub async fn reject_property<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    transition(state, auth, path, LifecycleOp::Reject).await
}

/// Handler for PATCH /add-advertise/property/{id}
pub async fn advertise_property<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    transition(state, auth, path, LifecycleOp::Advertise).await
}

/// Handler for PATCH /remove-advertise/property/{id}
pub async fn unadvertise_property<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
{
    transition(state, auth, path, LifecycleOp::Unadvertise).await
}

async fn transition<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
    op: LifecycleOp,
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

    let result = match op {
        LifecycleOp::Verify => state.lifecycle.verify(id).await,
        LifecycleOp::Reject => state.lifecycle.reject(id).await,
        LifecycleOp::Advertise => state.lifecycle.advertise(id).await,
        LifecycleOp::Unadvertise => state.lifecycle.unadvertise(id).await,
    };

    match result {
        Ok(property) => HttpResponse::Ok().json(PropertyResponse::from(property)),
        Err(error) => handle_domain_error(error),
    }
}
