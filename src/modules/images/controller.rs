use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use validator::Validate;

use crate::middleware::auth::AuthSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{CreateImageDto, Image, UpdateImageDto};
use super::service::ImageService;

#[utoipa::path(
    post,
    path = "/api/images",
    request_body = CreateImageDto,
    responses(
        (status = 201, description = "Image created", body = Image),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Images"
)]
#[instrument(skip(state, _session, dto))]
pub async fn create_image(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(dto): Json<CreateImageDto>,
) -> Result<(StatusCode, Json<Image>), AppError> {
    dto.validate()?;

    let image = ImageService::create_image(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

#[utoipa::path(
    get,
    path = "/api/images",
    params(PaginationParams),
    responses(
        (status = 200, description = "List of images", body = Vec<Image>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Images"
)]
#[instrument(skip(state, _session))]
pub async fn list_images(
    State(state): State<AppState>,
    _session: AuthSession,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<Image>>, AppError> {
    let images = ImageService::list_images(&state.db, pagination).await?;
    Ok(Json(images))
}

#[utoipa::path(
    put,
    path = "/api/images",
    request_body = UpdateImageDto,
    responses(
        (status = 200, description = "Image renamed", body = Image),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    ),
    tag = "Images"
)]
#[instrument(skip(state, _session, dto))]
pub async fn update_image(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(dto): Json<UpdateImageDto>,
) -> Result<Json<Image>, AppError> {
    dto.validate()?;

    let image = ImageService::rename_image(&state.db, dto).await?;
    Ok(Json(image))
}

#[utoipa::path(
    delete,
    path = "/api/images/{id}",
    params(("id" = i64, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    ),
    tag = "Images"
)]
#[instrument(skip(state, _session))]
pub async fn delete_image(
    State(state): State<AppState>,
    _session: AuthSession,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    ImageService::delete_image(&state.db, id).await?;
    Ok(StatusCode::OK)
}
