pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::middleware::correlation_id;
use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Render API
        .route(
            "/api/v1/resumes/render/html",
            post(handlers::handle_render_html),
        )
        .route(
            "/api/v1/resumes/render/pdf",
            post(handlers::handle_render_pdf),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum::middleware::from_fn(correlation_id))
        .with_state(state)
}
