use thiserror::Error;

/// Errors produced by the credential hasher and the claim issuer/validator.
///
/// All variants are recoverable and local to the call; the HTTP layer maps
/// them to response statuses in `utils::errors`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecurityError {
    /// The process secret is unset or empty. Checked on every call, since the
    /// environment may change between calls.
    #[error("process secret is not configured")]
    MissingSecret,

    /// The plaintext phrase was empty.
    #[error("phrase must not be empty")]
    EmptyPhrase,

    /// The token signature did not verify against the current secret.
    #[error("token signature verification failed")]
    Signature,

    /// The token could not be decoded for any non-signature reason.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Refresh was attempted with more than the allowed window remaining.
    #[error("token is not within the refresh window")]
    RefreshTooEarly,

    /// Token encoding failed.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// The OS random number generator failed while producing a salt.
    #[error("random salt generation failed: {0}")]
    Randomness(String),
}
