use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Public view of an account. The stored phrase hash and salt never leave
/// the service layer.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub created: DateTime<Utc>,
    pub deleted: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAccountDto {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub phrase: String,
}

/// Phrase update for an existing account. The stored salt is reused; only
/// the hash changes.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountDto {
    pub id: i64,
    #[validate(length(min = 1))]
    pub phrase: String,
}
