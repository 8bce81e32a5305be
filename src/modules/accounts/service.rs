use sqlx::PgPool;
use tracing::instrument;

use crate::security::PasswordHasher;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;

use super::model::{Account, CreateAccountDto, UpdateAccountDto};

pub struct AccountService;

impl AccountService {
    #[instrument(skip(db, hasher, dto), fields(username = %dto.username))]
    pub async fn create_account(
        db: &PgPool,
        hasher: &PasswordHasher,
        dto: CreateAccountDto,
    ) -> Result<Account, AppError> {
        let taken = sqlx::query_scalar::<_, i64>("SELECT id FROM accounts WHERE username = $1")
            .bind(&dto.username)
            .fetch_optional(db)
            .await?;

        if taken.is_some() {
            return Err(AppError::bad_request("please choose another username"));
        }

        let salt = hasher.generate_salt()?;
        let phrase_hash = hasher.generate_password_hash(dto.phrase.as_bytes(), &salt)?;

        let account = sqlx::query_as::<_, Account>(
            r#"INSERT INTO accounts (username, phrase, salt)
               VALUES ($1, $2, $3)
               RETURNING id, username, created, deleted"#,
        )
        .bind(&dto.username)
        .bind(&phrase_hash)
        .bind(&salt)
        .fetch_one(db)
        .await?;

        Ok(account)
    }

    #[instrument(skip(db))]
    pub async fn list_accounts(
        db: &PgPool,
        pagination: PaginationParams,
    ) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"SELECT id, username, created, deleted FROM accounts
               WHERE deleted = FALSE
               ORDER BY username
               LIMIT $1 OFFSET $2"#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(accounts)
    }

    /// Re-hashes the phrase under the account's existing salt and stores the
    /// new hash.
    #[instrument(skip(db, hasher, dto), fields(id = dto.id))]
    pub async fn update_phrase(
        db: &PgPool,
        hasher: &PasswordHasher,
        dto: UpdateAccountDto,
    ) -> Result<Account, AppError> {
        let salt = sqlx::query_scalar::<_, String>("SELECT salt FROM accounts WHERE id = $1")
            .bind(dto.id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("account not found"))?;

        let phrase_hash = hasher.generate_password_hash(dto.phrase.as_bytes(), &salt)?;

        let account = sqlx::query_as::<_, Account>(
            r#"UPDATE accounts SET phrase = $2
               WHERE id = $1
               RETURNING id, username, created, deleted"#,
        )
        .bind(dto.id)
        .bind(&phrase_hash)
        .fetch_one(db)
        .await?;

        Ok(account)
    }

    #[instrument(skip(db))]
    pub async fn delete_account(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE accounts SET deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("account not found"));
        }

        Ok(())
    }
}
