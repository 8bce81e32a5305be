use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::security::ClaimToken;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that validates the session-token cookie and provides the
/// verified claim.
///
/// Rejection order is fixed: missing cookie is unauthorized, a bad signature
/// is unauthorized, any other decode problem is a bad request, and only after
/// a clean parse is the validity flag consulted (expired tokens are
/// unauthorized).
#[derive(Debug, Clone)]
pub struct AuthSession(pub ClaimToken);

impl AuthSession {
    pub fn username(&self) -> &str {
        &self.0.claims.username
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = match CookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(infallible) => match infallible {},
        };

        let cookie = jar
            .get(&state.cookies.token_cookie)
            .ok_or_else(|| AppError::unauthorized("Missing session token".to_string()))?;

        let token = state.claimer.parse_token(cookie.value())?;

        if !token.valid {
            return Err(AppError::unauthorized("Session token expired".to_string()));
        }

        Ok(AuthSession(token))
    }
}
