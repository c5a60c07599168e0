//! Tests for the token codec

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use bb_shared::config::JwtConfig;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::TokenError;

use super::TokenService;

fn service() -> TokenService {
    TokenService::new(&JwtConfig::new("test-secret")).unwrap()
}

#[test]
fn test_empty_secret_is_a_startup_failure() {
    let err = TokenService::new(&JwtConfig::default()).unwrap_err();
    assert_eq!(err, TokenError::KeyMisconfigured);
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = service();

    let token = service.issue("alice@example.com").unwrap();
    let identity = service.verify(&token).unwrap();

    assert_eq!(identity.email(), "alice@example.com");
}

#[test]
fn test_verify_rejects_tampered_token() {
    let service = service();
    let token = service.issue("alice@example.com").unwrap();

    let mut tampered = token.into_bytes();
    let last = tampered.len() - 1;
    tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();

    assert_eq!(service.verify(&tampered).unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_verify_rejects_garbage() {
    let service = service();
    assert_eq!(
        service.verify("not-a-jwt-at-all").unwrap_err(),
        TokenError::Invalid
    );
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let issuer = TokenService::new(&JwtConfig::new("secret-one")).unwrap();
    let verifier = TokenService::new(&JwtConfig::new("secret-two")).unwrap();

    let token = issuer.issue("alice@example.com").unwrap();
    assert_eq!(verifier.verify(&token).unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_expired_token_is_rejected_despite_valid_signature() {
    let service = service();

    // Sign claims that expired well beyond the decoder's leeway with
    // the correct secret, bypassing issue()'s fresh timestamps.
    let mut claims = Claims::new("alice@example.com");
    let past = Utc::now() - Duration::hours(2);
    claims.iat = past.timestamp();
    claims.exp = (past + Duration::hours(1)).timestamp();

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    // Expired and tampered are indistinguishable to the caller.
    assert_eq!(service.verify(&token).unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_verify_rejects_wrong_issuer() {
    let service = service();

    let mut claims = Claims::new("alice@example.com");
    claims.iss = "someone-else".to_string();
    assert_ne!(claims.iss, JWT_ISSUER);

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    assert_eq!(service.verify(&token).unwrap_err(), TokenError::Invalid);
}
