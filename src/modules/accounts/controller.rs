use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;
use validator::Validate;

use crate::middleware::auth::AuthSession;
use crate::modules::auth::controller::{ErrorResponse, expiring_cookie};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{Account, CreateAccountDto, UpdateAccountDto};
use super::service::AccountService;

/// Create an account. On success the fresh session token is set as a cookie,
/// so newly registered users are signed in immediately.
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created", body = Account),
        (status = 400, description = "Invalid input or username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
#[instrument(skip(state, jar, dto))]
pub async fn create_account(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<CreateAccountDto>,
) -> Result<(CookieJar, (StatusCode, Json<Account>)), AppError> {
    dto.validate()?;

    let account = AccountService::create_account(&state.db, &state.hasher, dto).await?;

    let (token, expires_at) = state.claimer.issue_token(&account.username)?;
    let jar = jar.add(expiring_cookie(
        &state.cookies.token_cookie,
        token,
        expires_at,
    ));

    Ok((jar, (StatusCode::CREATED, Json(account))))
}

#[utoipa::path(
    get,
    path = "/api/accounts",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of accounts", body = Vec<Account>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
#[instrument(skip(state, _session))]
pub async fn list_accounts(
    State(state): State<AppState>,
    _session: AuthSession,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = AccountService::list_accounts(&state.db, pagination).await?;
    Ok(Json(accounts))
}

#[utoipa::path(
    put,
    path = "/api/accounts",
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Phrase updated", body = Account),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
#[instrument(skip(state, _session, dto))]
pub async fn update_account(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(dto): Json<UpdateAccountDto>,
) -> Result<Json<Account>, AppError> {
    dto.validate()?;

    let account = AccountService::update_phrase(&state.db, &state.hasher, dto).await?;
    Ok(Json(account))
}

#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
#[instrument(skip(state, _session))]
pub async fn delete_account(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    AccountService::delete_account(&state.db, id).await?;
    Ok(StatusCode::OK)
}
