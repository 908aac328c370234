pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::history::handlers as history;
use crate::state::AppState;

/// Upper bound for resume uploads.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Advisor API
        .route("/api/v1/recommendations", post(advisor::handle_recommend))
        .route(
            "/api/v1/profile/scan",
            post(advisor::handle_scan).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // History API
        .route(
            "/api/v1/history",
            get(history::handle_list)
                .post(history::handle_save)
                .delete(history::handle_clear),
        )
        .route(
            "/api/v1/history/:id",
            get(history::handle_get).delete(history::handle_delete),
        )
        .with_state(state)
}
