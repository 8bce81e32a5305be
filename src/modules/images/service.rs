use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{CreateImageDto, Image, UpdateImageDto};

pub struct ImageService;

impl ImageService {
    #[instrument(skip(db, dto))]
    pub async fn create_image(db: &PgPool, dto: CreateImageDto) -> Result<Image, AppError> {
        let image = sqlx::query_as::<_, Image>(
            r#"INSERT INTO images (data)
               VALUES ($1)
               RETURNING id, name, data, created, deleted"#,
        )
        .bind(&dto.data)
        .fetch_one(db)
        .await?;

        Ok(image)
    }

    #[instrument(skip(db))]
    pub async fn list_images(
        db: &PgPool,
        pagination: PaginationParams,
    ) -> Result<Vec<Image>, AppError> {
        let images = sqlx::query_as::<_, Image>(
            r#"SELECT id, name, data, created, deleted FROM images
               WHERE deleted = FALSE
               ORDER BY name
               LIMIT $1 OFFSET $2"#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(images)
    }

    #[instrument(skip(db, dto), fields(id = dto.id))]
    pub async fn rename_image(db: &PgPool, dto: UpdateImageDto) -> Result<Image, AppError> {
        let image = sqlx::query_as::<_, Image>(
            r#"UPDATE images SET name = $2
               WHERE id = $1
               RETURNING id, name, data, created, deleted"#,
        )
        .bind(dto.id)
        .bind(&dto.name)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("image not found"))?;

        Ok(image)
    }

    #[instrument(skip(db))]
    pub async fn delete_image(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE images SET deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("image not found"));
        }

        Ok(())
    }
}
