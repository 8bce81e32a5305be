use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{create_image, delete_image, list_images, update_image};

pub fn init_images_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_images).post(create_image).put(update_image))
        .route("/{id}", delete(delete_image))
}
