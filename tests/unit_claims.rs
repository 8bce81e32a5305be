use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use snapvault::security::claims::{REFRESH_WINDOW_SECS, TOKEN_TTL_SECS};
use snapvault::security::{Claimer, SecurityError, StaticSecret, UsernameClaims};

const SECRET: &str = "test-secret-key";

fn claimer_with(secret: &str) -> Claimer {
    Claimer::new(Arc::new(StaticSecret::new(secret)))
}

/// Encodes a token with an arbitrary expiry, bypassing the issuance policy.
fn forge_token(secret: &str, username: &str, exp: i64) -> String {
    let claims = UsernameClaims {
        username: username.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Swaps one character inside the signature segment of a JWT.
fn tamper_signature(token: &str) -> String {
    let dot = token.rfind('.').unwrap();
    let mut chars: Vec<char> = token.chars().collect();
    let target = dot + 1;
    chars[target] = if chars[target] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}

#[test]
fn test_token_round_trip() {
    let claimer = claimer_with(SECRET);

    let (token, expires_at) = claimer.issue_token("alice").unwrap();
    let parsed = claimer.parse_token(&token).unwrap();

    assert_eq!(parsed.claims.username, "alice");
    assert!(parsed.valid);
    assert_eq!(parsed.claims.exp, expires_at.timestamp());

    let ttl = expires_at.timestamp() - Utc::now().timestamp();
    assert!(ttl > TOKEN_TTL_SECS - 5 && ttl <= TOKEN_TTL_SECS);
}

#[test]
fn test_expired_token_parses_but_is_not_valid() {
    let claimer = claimer_with(SECRET);
    let token = forge_token(SECRET, "alice", Utc::now().timestamp() - 1);

    let parsed = claimer.parse_token(&token).unwrap();

    assert_eq!(parsed.claims.username, "alice");
    assert!(!parsed.valid);
}

#[test]
fn test_tampered_signature_is_rejected() {
    let claimer = claimer_with(SECRET);
    let (token, _) = claimer.issue_token("alice").unwrap();

    let err = claimer.parse_token(&tamper_signature(&token)).unwrap_err();

    assert_eq!(err, SecurityError::Signature);
}

#[test]
fn test_wrong_secret_is_a_signature_error() {
    let (token, _) = claimer_with(SECRET).issue_token("alice").unwrap();

    let err = claimer_with("other-secret").parse_token(&token).unwrap_err();

    assert_eq!(err, SecurityError::Signature);
}

#[test]
fn test_signature_verdict_precedes_expiry() {
    // Expired AND signed under the wrong key: the signature error wins.
    let claimer = claimer_with(SECRET);
    let token = forge_token("other-secret", "alice", Utc::now().timestamp() - 100);

    let err = claimer.parse_token(&token).unwrap_err();

    assert_eq!(err, SecurityError::Signature);
}

#[test]
fn test_garbage_token_is_malformed() {
    let claimer = claimer_with(SECRET);

    let err = claimer.parse_token("not-a-token").unwrap_err();

    assert!(matches!(err, SecurityError::Malformed(_)));
}

#[test]
fn test_missing_secret_errors() {
    let claimer = claimer_with("");

    assert_eq!(
        claimer.issue_token("alice").unwrap_err(),
        SecurityError::MissingSecret
    );
    assert_eq!(
        claimer.parse_token("anything").unwrap_err(),
        SecurityError::MissingSecret
    );
}

#[test]
fn test_refresh_accepted_inside_window() {
    let claimer = claimer_with(SECRET);
    let near_expiry = Utc::now().timestamp() + REFRESH_WINDOW_SECS - 1;
    let token = forge_token(SECRET, "alice", near_expiry);

    let parsed = claimer.parse_token(&token).unwrap();
    assert!(parsed.valid);

    let (refreshed, expires_at) = claimer.refresh_token(&parsed).unwrap();

    let reparsed = claimer.parse_token(&refreshed).unwrap();
    assert_eq!(reparsed.claims.username, "alice");
    assert!(reparsed.valid);
    assert!(expires_at.timestamp() > near_expiry);
}

#[test]
fn test_refresh_rejected_outside_window() {
    let claimer = claimer_with(SECRET);
    let token = forge_token(SECRET, "alice", Utc::now().timestamp() + REFRESH_WINDOW_SECS + 5);

    let parsed = claimer.parse_token(&token).unwrap();
    let err = claimer.refresh_token(&parsed).unwrap_err();

    assert_eq!(err, SecurityError::RefreshTooEarly);
}

#[test]
fn test_fresh_token_cannot_be_refreshed() {
    let claimer = claimer_with(SECRET);
    let (token, _) = claimer.issue_token("alice").unwrap();

    let parsed = claimer.parse_token(&token).unwrap();
    let err = claimer.refresh_token(&parsed).unwrap_err();

    assert_eq!(err, SecurityError::RefreshTooEarly);
}
