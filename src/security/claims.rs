use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::security::error::SecurityError;
use crate::security::secret::SecretSource;

/// Lifetime of a freshly issued token.
pub const TOKEN_TTL_SECS: i64 = 5 * 60;

/// A token may only be refreshed when it is this close to expiry.
pub const REFRESH_WINDOW_SECS: i64 = 30;

/// Signed assertion of identity: a username and an absolute expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameClaims {
    pub username: String,
    /// Expiry as Unix seconds.
    pub exp: i64,
}

/// A parsed, signature-verified token.
///
/// Parsing succeeds for any well-signed token, expired or not; `valid`
/// reflects whether the expiry has passed. Callers must check it in addition
/// to the parse result.
#[derive(Debug, Clone)]
pub struct ClaimToken {
    pub claims: UsernameClaims,
    pub valid: bool,
}

impl ClaimToken {
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.claims.exp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

/// Issues, validates, and refreshes signed username claims.
///
/// Tokens are HS256 JWTs signed with the process secret. There is no
/// server-side token state and no revocation; expiry is the only
/// invalidation path.
#[derive(Clone)]
pub struct Claimer {
    secrets: Arc<dyn SecretSource>,
}

impl Claimer {
    pub fn new(secrets: Arc<dyn SecretSource>) -> Self {
        Self { secrets }
    }

    /// Mints a token for `username` expiring [`TOKEN_TTL_SECS`] from now.
    /// Returns the serialized token together with the chosen expiry.
    pub fn issue_token(
        &self,
        username: &str,
    ) -> Result<(String, DateTime<Utc>), SecurityError> {
        let secret = self.secrets.secret().ok_or(SecurityError::MissingSecret)?;

        let expires_at = Utc::now() + chrono::Duration::seconds(TOKEN_TTL_SECS);
        let claims = UsernameClaims {
            username: username.to_string(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| SecurityError::Signing(e.to_string()))?;

        Ok((token, expires_at))
    }

    /// Verifies the signature of `token` and decodes the embedded claims.
    ///
    /// The signature verdict is authoritative: a bad signature is
    /// [`SecurityError::Signature`] and any other decode problem is
    /// [`SecurityError::Malformed`]. Expiry is not an error here; an expired
    /// but well-signed token is returned with `valid == false`.
    pub fn parse_token(&self, token: &str) -> Result<ClaimToken, SecurityError> {
        let secret = self.secrets.secret().ok_or(SecurityError::MissingSecret)?;

        // Expiry is reported through the validity flag, not as a decode error.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data = decode::<UsernameClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => SecurityError::Signature,
            _ => SecurityError::Malformed(e.to_string()),
        })?;

        let valid = data.claims.exp > Utc::now().timestamp();
        Ok(ClaimToken {
            claims: data.claims,
            valid,
        })
    }

    /// Reissues a token for the same username with a renewed lifetime.
    ///
    /// Only permitted when the existing claim is within
    /// [`REFRESH_WINDOW_SECS`] of expiry; otherwise fails with
    /// [`SecurityError::RefreshTooEarly`]. Callers must only pass tokens whose
    /// validity flag is set; the HTTP boundary rejects expired tokens before
    /// reaching this call.
    pub fn refresh_token(
        &self,
        token: &ClaimToken,
    ) -> Result<(String, DateTime<Utc>), SecurityError> {
        let remaining = token.claims.exp - Utc::now().timestamp();
        if remaining > REFRESH_WINDOW_SECS {
            return Err(SecurityError::RefreshTooEarly);
        }
        self.issue_token(&token.claims.username)
    }
}

impl std::fmt::Debug for Claimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Claimer").finish_non_exhaustive()
    }
}
