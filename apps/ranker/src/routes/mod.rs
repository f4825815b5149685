pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ranking::handlers;
use crate::render::handlers as page;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML page
        .route("/", get(page::handle_index))
        .route("/rank", post(page::handle_rank_page))
        .route("/rank/export", post(page::handle_export_page))
        // Ranking API
        .route("/api/v1/rankings", post(handlers::handle_rank))
        .route("/api/v1/rankings/export", post(handlers::handle_export))
        .layer(body_limit)
        .with_state(state)
}
