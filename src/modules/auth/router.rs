use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{refresh, sign_in, welcome};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signin", post(sign_in))
        .route("/welcome", get(welcome))
        .route("/refresh", post(refresh))
}
