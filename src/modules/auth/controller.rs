use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Utc};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

use crate::middleware::auth::AuthSession;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::SignInRequest;
use super::service::AuthService;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Builds a session cookie whose `Expires` matches the claim's expiry.
pub(crate) fn expiring_cookie(
    name: &str,
    value: String,
    expires_at: DateTime<Utc>,
) -> Cookie<'static> {
    let expires = OffsetDateTime::from_unix_timestamp(expires_at.timestamp())
        .unwrap_or_else(|_| OffsetDateTime::now_utc());

    Cookie::build((name.to_owned(), value))
        .path("/")
        .http_only(true)
        .expires(expires)
        .build()
}

/// Sign in with username and phrase. On success the session token is set as
/// a cookie expiring with the claim.
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in, token cookie set"),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "Invalid username or phrase", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, jar, req))]
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignInRequest>,
) -> Result<(CookieJar, StatusCode), AppError> {
    req.validate()?;

    let (token, expires_at) =
        AuthService::sign_in(&state.db, &state.hasher, &state.claimer, req).await?;

    let jar = jar.add(expiring_cookie(
        &state.cookies.token_cookie,
        token,
        expires_at,
    ));

    Ok((jar, StatusCode::OK))
}

/// Protected greeting returning the username from the validated claim.
#[utoipa::path(
    get,
    path = "/api/auth/welcome",
    responses(
        (status = 200, description = "Greeting for the signed-in user", body = String),
        (status = 400, description = "Malformed token", body = ErrorResponse),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(session))]
pub async fn welcome(session: AuthSession) -> String {
    format!("Welcome {}!", session.username())
}

/// Reissue the session token shortly before it expires.
///
/// A new token is only issued when the current one is within 30 seconds of
/// expiry; refreshed tokens are set under the session cookie name.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    responses(
        (status = 200, description = "Token refreshed, session cookie set"),
        (status = 400, description = "Malformed token or refresh too early", body = ErrorResponse),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, jar))]
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), AppError> {
    let cookie = jar
        .get(&state.cookies.token_cookie)
        .ok_or_else(|| AppError::unauthorized("Missing session token"))?;

    // Signature verdict first, validity flag only on a clean parse.
    let token = state.claimer.parse_token(cookie.value())?;
    if !token.valid {
        return Err(AppError::unauthorized("Session token expired"));
    }

    let (refreshed, expires_at) = state.claimer.refresh_token(&token)?;

    let jar = jar.add(expiring_cookie(
        &state.cookies.session_cookie,
        refreshed,
        expires_at,
    ));

    Ok((jar, StatusCode::OK))
}
