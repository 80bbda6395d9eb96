pub mod health;
pub mod pages;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::roster::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::upload_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/roster/generate", post(handlers::handle_generate))
        // Rosters are plain text; a megabyte is already generous.
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .with_state(state)
}
