use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Image {
    pub id: i64,
    pub name: Option<String>,
    /// Base64-encoded image payload, stored as given.
    pub data: String,
    pub created: DateTime<Utc>,
    pub deleted: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateImageDto {
    #[validate(length(min = 1))]
    pub data: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateImageDto {
    pub id: i64,
    #[validate(length(min = 1))]
    pub name: String,
}
