use std::sync::Arc;

use snapvault::security::hasher::SALT_LEN;
use snapvault::security::{PasswordHasher, SecurityError, StaticSecret};

fn hasher_with(secret: &str) -> PasswordHasher {
    PasswordHasher::new(Arc::new(StaticSecret::new(secret)))
}

#[test]
fn test_generate_salt_is_printable_and_fresh() {
    let hasher = hasher_with("secret");

    let salt1 = hasher.generate_salt().unwrap();
    let salt2 = hasher.generate_salt().unwrap();

    assert!(!salt1.is_empty());
    assert_ne!(salt1, salt2);
    // base64url expansion of SALT_LEN random bytes
    assert!(salt1.len() >= SALT_LEN / 3 * 4);
    assert!(salt1.chars().all(|c| c.is_ascii_graphic()));
}

#[test]
fn test_hash_is_deterministic() {
    let hasher = hasher_with("secret");

    let first = hasher.generate_password_hash(b"phrase", "salty").unwrap();
    let second = hasher.generate_password_hash(b"phrase", "salty").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_hash_changes_with_salt() {
    let hasher = hasher_with("secret");

    let first = hasher.generate_password_hash(b"phrase", "salt-one").unwrap();
    let second = hasher.generate_password_hash(b"phrase", "salt-two").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_hash_changes_with_secret() {
    let first = hasher_with("secret-one")
        .generate_password_hash(b"phrase", "salty")
        .unwrap();
    let second = hasher_with("secret-two")
        .generate_password_hash(b"phrase", "salty")
        .unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_verification_round_trip() {
    let hasher = hasher_with("secret");
    let salt = hasher.generate_salt().unwrap();

    let hash = hasher.generate_password_hash(b"correct horse", &salt).unwrap();

    assert!(hasher.is_valid_password(&hash, &salt, b"correct horse").unwrap());
    assert!(!hasher.is_valid_password(&hash, &salt, b"wrong horse").unwrap());
}

#[test]
fn test_empty_phrase_rejected_regardless_of_secret() {
    let with_secret = hasher_with("secret");
    let without_secret = hasher_with("");

    assert_eq!(
        with_secret.generate_password_hash(b"", "salty").unwrap_err(),
        SecurityError::EmptyPhrase
    );
    assert_eq!(
        without_secret.generate_password_hash(b"", "salty").unwrap_err(),
        SecurityError::EmptyPhrase
    );
}

#[test]
fn test_missing_secret_errors() {
    let hasher = hasher_with("");

    assert_eq!(
        hasher.generate_password_hash(b"phrase", "salty").unwrap_err(),
        SecurityError::MissingSecret
    );
    assert_eq!(
        hasher.is_valid_password(&[0u8; 64], "salty", b"phrase").unwrap_err(),
        SecurityError::MissingSecret
    );
}

#[test]
fn test_empty_candidate_never_matches() {
    let hasher = hasher_with("secret");

    assert!(!hasher.is_valid_password(&[0u8; 64], "salty", b"").unwrap());
}

#[test]
fn test_stale_hash_fails_after_secret_rotation() {
    let salt = "stable salt";
    let hash = hasher_with("old-secret")
        .generate_password_hash(b"phrase", salt)
        .unwrap();

    let rotated = hasher_with("new-secret");
    assert!(!rotated.is_valid_password(&hash, salt, b"phrase").unwrap());
}

// Known-answer fixture: HMAC-SHA512 with key "z" over "bar" ‖ "salt the snail".
#[test]
fn test_known_answer_fixture() {
    let hasher = hasher_with("z");

    let hash = hasher.generate_password_hash(b"bar", "salt the snail").unwrap();

    let expected = hex::decode(
        "11ca78c811d170719c88acf8a533d86266d81c924698005d323917f13ed456de\
         2533e07b8023312da1e1e959290513c8a59a62e3a9b6c8ec758d2ba90accc98c",
    )
    .unwrap();
    assert_eq!(hash, expected);
    assert!(hasher.is_valid_password(&expected, "salt the snail", b"bar").unwrap());
}
