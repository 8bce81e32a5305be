use std::sync::Arc;

use sqlx::PgPool;

use crate::config::auth::AuthCookieConfig;
use crate::config::database::init_db_pool;
use crate::security::{Claimer, EnvSecret, PasswordHasher};

/// Shared application state.
///
/// The hasher and claimer are constructed here and injected everywhere they
/// are needed; there is no ambient global holding them. Both read the process
/// secret through the same [`EnvSecret`] provider on every call, so a rotated
/// `SECRET` takes effect without a restart.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub hasher: PasswordHasher,
    pub claimer: Claimer,
    pub cookies: AuthCookieConfig,
}

pub async fn init_app_state() -> AppState {
    let secrets = Arc::new(EnvSecret::default());
    AppState {
        db: init_db_pool().await,
        hasher: PasswordHasher::new(secrets.clone()),
        claimer: Claimer::new(secrets),
        cookies: AuthCookieConfig::from_env(),
    }
}
