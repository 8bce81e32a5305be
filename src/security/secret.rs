use std::env;

/// Source of the process-wide symmetric key used for both password hashing
/// and token signing.
///
/// Implementations must tolerate being called on every operation: the secret
/// is deliberately not cached at startup, so a rotated value is picked up by
/// the next call. Returning `None` (unset or empty) is a valid runtime state
/// that operations report as [`SecurityError::MissingSecret`].
///
/// [`SecurityError::MissingSecret`]: crate::security::SecurityError::MissingSecret
pub trait SecretSource: Send + Sync {
    /// Returns the current secret, or `None` when it is unset or empty.
    fn secret(&self) -> Option<String>;
}

/// Reads the secret from an environment variable on each call.
#[derive(Debug, Clone)]
pub struct EnvSecret {
    var: String,
}

impl EnvSecret {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSecret {
    fn default() -> Self {
        Self::new("SECRET")
    }
}

impl SecretSource for EnvSecret {
    fn secret(&self) -> Option<String> {
        env::var(&self.var).ok().filter(|s| !s.is_empty())
    }
}

/// A fixed secret. Used as the test double and for deployments that inject
/// the key through other means.
#[derive(Debug, Clone)]
pub struct StaticSecret(String);

impl StaticSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl SecretSource for StaticSecret {
    fn secret(&self) -> Option<String> {
        Some(self.0.clone()).filter(|s| !s.is_empty())
    }
}
