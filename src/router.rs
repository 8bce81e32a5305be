use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::accounts::router::init_accounts_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::images::router::init_images_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/accounts", init_accounts_router())
                .nest("/images", init_images_router())
                .nest("/auth", init_auth_router()),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
}
