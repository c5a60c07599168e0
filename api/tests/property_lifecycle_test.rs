//! Integration tests for the property lifecycle routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use bb_api::app::create_app;
use bb_core::domain::entities::user::UserRole;

use common::context;

#[actix_web::test]
async fn test_submission_requires_an_agent() {
    let ctx = context();
    ctx.seed_user("buyer@example.com", UserRole::None).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/add/properties")
        .insert_header(("Authorization", ctx.bearer("buyer@example.com")))
        .set_json(serde_json::json!({ "title": "Not my house" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_submission_starts_pending_and_owned_by_the_token_identity() {
    let ctx = context();
    ctx.seed_user("agent@example.com", UserRole::Agent).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/add/properties")
        .insert_header(("Authorization", ctx.bearer("agent@example.com")))
        .set_json(serde_json::json!({
            "title": "Lakeside flat",
            "location": "Dhaka",
            // Ignored: ownership derives from the verified identity.
            "agent_email": "someone-else@example.com",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["agent_email"], "agent@example.com");
    assert_eq!(body["verification_status"], "pending");
    assert_eq!(body["is_advertised"], false);
}

#[actix_web::test]
async fn test_lifecycle_routes_are_admin_only() {
    let ctx = context();
    ctx.seed_user("agent@example.com", UserRole::Agent).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let id = ctx.seed_listing("agent@example.com").await;

    for path in [
        format!("/verify/property/{}", id),
        format!("/reject/property/{}", id),
        format!("/add-advertise/property/{}", id),
        format!("/remove-advertise/property/{}", id),
    ] {
        let req = test::TestRequest::patch()
            .uri(&path)
            .insert_header(("Authorization", ctx.bearer("agent@example.com")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.status(),
            StatusCode::FORBIDDEN,
            "{} should be admin-only",
            path
        );
    }
}

#[actix_web::test]
async fn test_advertise_then_verify_then_advertise_scenario() {
    let ctx = context();
    ctx.seed_user("agent@example.com", UserRole::Agent).await;
    ctx.seed_user("root@example.com", UserRole::Admin).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let id = ctx.seed_listing("agent@example.com").await;

    // Advertising a pending listing is an invalid transition, not an
    // authorization failure.
    let req = test::TestRequest::patch()
        .uri(&format!("/add-advertise/property/{}", id))
        .insert_header(("Authorization", ctx.bearer("root@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Verify, then advertising succeeds.
    let req = test::TestRequest::patch()
        .uri(&format!("/verify/property/{}", id))
        .insert_header(("Authorization", ctx.bearer("root@example.com")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["verification_status"], "verified");

    let req = test::TestRequest::patch()
        .uri(&format!("/add-advertise/property/{}", id))
        .insert_header(("Authorization", ctx.bearer("root@example.com")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["is_advertised"], true);
}

#[actix_web::test]
async fn test_verify_is_idempotent_over_http() {
    let ctx = context();
    ctx.seed_user("agent@example.com", UserRole::Agent).await;
    ctx.seed_user("root@example.com", UserRole::Admin).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let id = ctx.seed_listing("agent@example.com").await;

    for _ in 0..2 {
        let req = test::TestRequest::patch()
            .uri(&format!("/verify/property/{}", id))
            .insert_header(("Authorization", ctx.bearer("root@example.com")))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["verification_status"], "verified");
    }
}

#[actix_web::test]
async fn test_reject_withdraws_advertisement_over_http() {
    let ctx = context();
    ctx.seed_user("agent@example.com", UserRole::Agent).await;
    ctx.seed_user("root@example.com", UserRole::Admin).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let id = ctx.seed_listing("agent@example.com").await;
    let admin = ctx.bearer("root@example.com");

    for path in [
        format!("/verify/property/{}", id),
        format!("/add-advertise/property/{}", id),
    ] {
        let req = test::TestRequest::patch()
            .uri(&path)
            .insert_header(("Authorization", admin.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::patch()
        .uri(&format!("/reject/property/{}", id))
        .insert_header(("Authorization", admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["verification_status"], "rejected");
    assert_eq!(body["is_advertised"], false);
}

#[actix_web::test]
async fn test_unknown_and_malformed_ids() {
    let ctx = context();
    ctx.seed_user("root@example.com", UserRole::Admin).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/verify/property/{}", uuid::Uuid::new_v4()))
        .insert_header(("Authorization", ctx.bearer("root@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::patch()
        .uri("/verify/property/not-a-uuid")
        .insert_header(("Authorization", ctx.bearer("root@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_agent_properties_filters_by_identity() {
    let ctx = context();
    ctx.seed_user("alice@example.com", UserRole::Agent).await;
    ctx.seed_user("bob@example.com", UserRole::Agent).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    ctx.seed_listing("alice@example.com").await;
    ctx.seed_listing("bob@example.com").await;

    let req = test::TestRequest::get()
        .uri("/agent-properties")
        .insert_header(("Authorization", ctx.bearer("alice@example.com")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let listings = body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["agent_email"], "alice@example.com");
}

#[actix_web::test]
async fn test_agent_properties_rejects_foreign_email_filter() {
    let ctx = context();
    ctx.seed_user("alice@example.com", UserRole::Agent).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    // A client-supplied filter for someone else is rejected, not trusted.
    let req = test::TestRequest::get()
        .uri("/agent-properties?email=bob@example.com")
        .insert_header(("Authorization", ctx.bearer("alice@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // The caller's own email is accepted (and redundant).
    let req = test::TestRequest::get()
        .uri("/agent-properties?email=alice@example.com")
        .insert_header(("Authorization", ctx.bearer("alice@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
