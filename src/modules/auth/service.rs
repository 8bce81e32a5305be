use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::security::{Claimer, PasswordHasher};
use crate::utils::errors::AppError;

use super::model::SignInRequest;

/// Credential material for one account, as the sign-in flow needs it.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub username: String,
    pub phrase: Vec<u8>,
    pub salt: String,
}

/// Narrow lookup interface the sign-in flow consumes from storage.
pub trait CredentialStore {
    fn lookup_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<CredentialRecord>, AppError>> + Send;
}

impl CredentialStore for PgPool {
    async fn lookup_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, AppError> {
        #[derive(sqlx::FromRow)]
        struct Row {
            username: String,
            phrase: Vec<u8>,
            salt: String,
        }

        let row = sqlx::query_as::<_, Row>(
            "SELECT username, phrase, salt FROM accounts WHERE username = $1 AND deleted = FALSE",
        )
        .bind(username)
        .fetch_optional(self)
        .await?;

        Ok(row.map(|r| CredentialRecord {
            username: r.username,
            phrase: r.phrase,
            salt: r.salt,
        }))
    }
}

pub struct AuthService;

impl AuthService {
    /// Verifies the supplied phrase against the stored credential and mints a
    /// session token.
    ///
    /// Unknown usernames and wrong phrases are both reported as unauthorized,
    /// without distinguishing the two. Hasher failures (missing secret) are
    /// internal errors, never a silent match.
    #[instrument(skip(store, hasher, claimer, req), fields(username = %req.username))]
    pub async fn sign_in<S: CredentialStore>(
        store: &S,
        hasher: &PasswordHasher,
        claimer: &Claimer,
        req: SignInRequest,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let record = store
            .lookup_by_username(&req.username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or phrase"))?;

        let valid = hasher.is_valid_password(&record.phrase, &record.salt, req.phrase.as_bytes())?;

        if !valid {
            return Err(AppError::unauthorized("Invalid username or phrase"));
        }

        let issued = claimer.issue_token(&record.username)?;
        Ok(issued)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::security::StaticSecret;

    use super::*;

    /// Hand-written in-memory store double.
    struct StubCredentialStore {
        records: HashMap<String, CredentialRecord>,
    }

    impl CredentialStore for StubCredentialStore {
        async fn lookup_by_username(
            &self,
            username: &str,
        ) -> Result<Option<CredentialRecord>, AppError> {
            Ok(self.records.get(username).cloned())
        }
    }

    fn fixture() -> (StubCredentialStore, PasswordHasher, Claimer) {
        let secrets = Arc::new(StaticSecret::new("test-secret"));
        let hasher = PasswordHasher::new(secrets.clone());
        let claimer = Claimer::new(secrets);

        let salt = hasher.generate_salt().unwrap();
        let phrase = hasher.generate_password_hash(b"correct horse", &salt).unwrap();

        let mut records = HashMap::new();
        records.insert(
            "alice".to_string(),
            CredentialRecord {
                username: "alice".to_string(),
                phrase,
                salt,
            },
        );

        (StubCredentialStore { records }, hasher, claimer)
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let (store, hasher, claimer) = fixture();
        let req = SignInRequest {
            username: "alice".to_string(),
            phrase: "correct horse".to_string(),
        };

        let (token, expires_at) = AuthService::sign_in(&store, &hasher, &claimer, req)
            .await
            .unwrap();

        assert!(!token.is_empty());
        assert!(expires_at > chrono::Utc::now());

        let parsed = claimer.parse_token(&token).unwrap();
        assert_eq!(parsed.claims.username, "alice");
        assert!(parsed.valid);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_phrase() {
        let (store, hasher, claimer) = fixture();
        let req = SignInRequest {
            username: "alice".to_string(),
            phrase: "wrong horse".to_string(),
        };

        let err = AuthService::sign_in(&store, &hasher, &claimer, req)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sign_in_unknown_user() {
        let (store, hasher, claimer) = fixture();
        let req = SignInRequest {
            username: "mallory".to_string(),
            phrase: "correct horse".to_string(),
        };

        let err = AuthService::sign_in(&store, &hasher, &claimer, req)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sign_in_missing_secret_is_internal_error() {
        let (store, _, _) = fixture();
        let no_secret = Arc::new(StaticSecret::new(""));
        let hasher = PasswordHasher::new(no_secret.clone());
        let claimer = Claimer::new(no_secret);

        let req = SignInRequest {
            username: "alice".to_string(),
            phrase: "correct horse".to_string(),
        };

        let err = AuthService::sign_in(&store, &hasher, &claimer, req)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
