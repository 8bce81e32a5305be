use std::env;

/// Cookie names used for the session-token transport.
///
/// The token minted at sign-in and account creation is carried under
/// `token_cookie` with `Expires` set to the claim's expiry; a refreshed token
/// is set under the distinct `session_cookie`. Both names are part of the
/// client contract and therefore configurable.
///
/// # Environment Variables
///
/// - `TOKEN_COOKIE_NAME` (default `token`)
/// - `SESSION_COOKIE_NAME` (default `session_token`)
#[derive(Clone, Debug)]
pub struct AuthCookieConfig {
    pub token_cookie: String,
    pub session_cookie: String,
}

impl AuthCookieConfig {
    pub fn from_env() -> Self {
        Self {
            token_cookie: env::var("TOKEN_COOKIE_NAME").unwrap_or_else(|_| "token".to_string()),
            session_cookie: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "session_token".to_string()),
        }
    }
}

impl Default for AuthCookieConfig {
    fn default() -> Self {
        Self {
            token_cookie: "token".to_string(),
            session_cookie: "session_token".to_string(),
        }
    }
}
