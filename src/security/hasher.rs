use std::sync::Arc;

use data_encoding::BASE64URL;
use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha512;

use crate::security::error::SecurityError;
use crate::security::secret::SecretSource;

type HmacSha512 = Hmac<Sha512>;

/// Number of random bytes drawn for a fresh salt.
pub const SALT_LEN: usize = 4096;

/// Salted, keyed password hashing.
///
/// Hashes are HMAC-SHA512 over `phrase ‖ salt`, keyed by the process secret.
/// A stored hash is valid only relative to the `(salt, secret)` pair that
/// produced it; changing the secret invalidates every stored hash at once.
#[derive(Clone)]
pub struct PasswordHasher {
    secrets: Arc<dyn SecretSource>,
}

impl PasswordHasher {
    pub fn new(secrets: Arc<dyn SecretSource>) -> Self {
        Self { secrets }
    }

    /// Generates a fresh per-credential salt: [`SALT_LEN`] bytes from the OS
    /// CSPRNG, base64url-encoded for storage.
    pub fn generate_salt(&self) -> Result<String, SecurityError> {
        let mut bytes = vec![0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| SecurityError::Randomness(e.to_string()))?;
        Ok(BASE64URL.encode(&bytes))
    }

    /// Computes the keyed hash for `phrase ‖ salt` under the current secret.
    ///
    /// Deterministic: the same `(phrase, salt, secret)` always yields the same
    /// bytes. Fails with [`SecurityError::EmptyPhrase`] for an empty phrase
    /// (regardless of secret state) and [`SecurityError::MissingSecret`] when
    /// the secret is unavailable.
    pub fn generate_password_hash(
        &self,
        phrase: &[u8],
        salt: &str,
    ) -> Result<Vec<u8>, SecurityError> {
        if phrase.is_empty() {
            return Err(SecurityError::EmptyPhrase);
        }
        let secret = self.secrets.secret().ok_or(SecurityError::MissingSecret)?;

        let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
            .map_err(|e| SecurityError::Signing(e.to_string()))?;
        mac.update(phrase);
        mac.update(salt.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }

    /// Recomputes the hash for `candidate` under the current secret and
    /// compares it to `stored_hash` in constant time.
    ///
    /// An empty candidate can never match, since hashes only exist for
    /// non-empty phrases. Fails with [`SecurityError::MissingSecret`] when the
    /// secret is unavailable; callers must treat that as no match.
    pub fn is_valid_password(
        &self,
        stored_hash: &[u8],
        salt: &str,
        candidate: &[u8],
    ) -> Result<bool, SecurityError> {
        if candidate.is_empty() {
            return Ok(false);
        }
        let secret = self.secrets.secret().ok_or(SecurityError::MissingSecret)?;

        let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
            .map_err(|e| SecurityError::Signing(e.to_string()))?;
        mac.update(candidate);
        mac.update(salt.as_bytes());
        // verify_slice is a constant-time comparison.
        Ok(mac.verify_slice(stored_hash).is_ok())
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}
