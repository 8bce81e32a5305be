//! Credential hashing and session-token issuance.
//!
//! This module is the security core of the API:
//!
//! - [`hasher`]: salted, keyed password hashing with constant-time verification
//! - [`claims`]: signed username claims with a fixed five-minute lifetime and a
//!   narrow renew-near-expiry refresh policy
//! - [`secret`]: the injected process-secret provider shared by both
//! - [`error`]: the error taxonomy returned to the HTTP boundary
//!
//! Both the hasher and the claimer are stateless over their inputs plus the
//! ambient process secret. The secret is re-read through the provider on every
//! operation, so rotating it takes effect without a restart (and immediately
//! invalidates every stored hash and outstanding token).

pub mod claims;
pub mod error;
pub mod hasher;
pub mod secret;

pub use claims::{ClaimToken, Claimer, UsernameClaims};
pub use error::SecurityError;
pub use hasher::PasswordHasher;
pub use secret::{EnvSecret, SecretSource, StaticSecret};
