//! Token issuing and verification tests.

use super::helpers::*;
use crate::*;
use chrono::Duration;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use m2dg_platform::{Clock, SystemClock};
use serde::Serialize;
use std::sync::Arc;

#[test]
fn test_issue_and_verify() {
    let (service, _clock) = create_test_token_service();

    let issued = service.issue("user-1", None).unwrap();
    assert_eq!(issued.token_type, "bearer");
    assert_eq!(issued.expires_at, start_time() + Duration::seconds(900));

    assert_eq!(service.verify(&issued.access_token).unwrap(), "user-1");
}

#[test]
fn test_expiry_boundary() {
    let (service, clock) = create_test_token_service();
    let issued = service.issue("user-1", Some(Duration::seconds(60))).unwrap();

    clock.set(start_time() + Duration::seconds(60) - Duration::milliseconds(1));
    assert_eq!(service.verify(&issued.access_token).unwrap(), "user-1");

    clock.set(start_time() + Duration::seconds(60));
    assert!(matches!(
        service.verify(&issued.access_token),
        Err(SessionError::InvalidToken)
    ));

    clock.set(start_time() + Duration::seconds(61));
    assert!(matches!(
        service.verify(&issued.access_token),
        Err(SessionError::InvalidToken)
    ));
}

#[test]
fn test_expires_at_matches_enforced_expiry_on_fractional_clock() {
    let (service, clock) = create_test_token_service();
    let issued_at = start_time() + Duration::milliseconds(750);
    clock.set(issued_at);

    let issued = service.issue("user-1", Some(Duration::seconds(60))).unwrap();
    assert_eq!(issued.expires_at, start_time() + Duration::seconds(60));

    clock.set(issued.expires_at - Duration::milliseconds(1));
    assert_eq!(service.verify(&issued.access_token).unwrap(), "user-1");

    clock.set(issued.expires_at);
    assert!(matches!(
        service.verify(&issued.access_token),
        Err(SessionError::InvalidToken)
    ));
}

#[test]
fn test_oversized_ttl_is_an_error() {
    let (service, _clock) = create_test_token_service();

    let result = service.issue("user-1", Some(Duration::days(365 * 1_000_000)));
    assert!(matches!(result, Err(SessionError::TtlOutOfRange)));
}

#[test]
fn test_wrong_key_rejected() {
    let (service, _clock) = create_test_token_service();
    let issued = service.issue("user-1", None).unwrap();

    let rotated = TokenService::new(
        b"a-completely-different-secret-of-32-bytes",
        Duration::seconds(900),
        Arc::new(m2dg_platform::ManualClock::new(start_time())),
    );
    assert!(matches!(
        rotated.verify(&issued.access_token),
        Err(SessionError::InvalidToken)
    ));
}

#[derive(Serialize)]
struct ClaimsWithoutSubject {
    iat: i64,
    exp: i64,
}

#[test]
fn test_missing_or_empty_subject_rejected() {
    let (service, _clock) = create_test_token_service();
    let exp = (start_time() + Duration::seconds(900)).timestamp();

    let no_sub = encode(
        &Header::new(Algorithm::HS256),
        &ClaimsWithoutSubject {
            iat: start_time().timestamp(),
            exp,
        },
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap();
    assert!(matches!(
        service.verify(&no_sub),
        Err(SessionError::InvalidToken)
    ));

    let empty_sub = encode(
        &Header::new(Algorithm::HS256),
        &TokenClaims {
            sub: String::new(),
            iat: start_time().timestamp(),
            exp,
        },
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap();
    assert!(matches!(
        service.verify(&empty_sub),
        Err(SessionError::InvalidToken)
    ));
}

#[test]
fn test_other_algorithms_rejected() {
    let (service, _clock) = create_test_token_service();
    let token = encode(
        &Header::new(Algorithm::HS512),
        &TokenClaims {
            sub: "user-1".to_string(),
            iat: start_time().timestamp(),
            exp: (start_time() + Duration::seconds(900)).timestamp(),
        },
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(SessionError::InvalidToken)
    ));
}

#[test]
fn test_garbage_rejected() {
    let (service, _clock) = create_test_token_service();
    for token in ["", "not-a-jwt", "a.b.c"] {
        assert!(matches!(
            service.verify(token),
            Err(SessionError::InvalidToken)
        ));
    }
}

#[test]
fn test_system_clock_default_ttl() {
    let clock = Arc::new(SystemClock);
    let service = TokenService::new(
        TEST_SECRET,
        Duration::seconds(DEFAULT_ACCESS_TOKEN_TTL_SECONDS),
        clock.clone(),
    );

    let issued = service.issue("user-1", None).unwrap();
    let remaining = issued.expires_at - clock.now();
    assert!(remaining <= Duration::seconds(900));
    assert!(remaining > Duration::seconds(890));
    assert_eq!(service.verify(&issued.access_token).unwrap(), "user-1");
}
