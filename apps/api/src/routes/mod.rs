pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/catalog", get(handlers::handle_get_catalog))
        .route(
            "/api/v1/catalog/companies",
            get(handlers::handle_list_companies),
        )
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze_upload))
        .route("/api/v1/analyze/text", post(handlers::handle_analyze_text))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
