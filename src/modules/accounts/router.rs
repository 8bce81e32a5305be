use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{create_account, delete_account, list_accounts, update_account};

pub fn init_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts).post(create_account).put(update_account))
        .route("/{id}", delete(delete_account))
}
