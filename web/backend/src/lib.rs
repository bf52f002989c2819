pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the API router; shared by the binary and the handler tests.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/campus",
            get(handlers::get_campus).post(handlers::update_campus),
        )
        .route(
            "/api/buildings",
            get(handlers::list_buildings).post(handlers::add_building),
        )
        .route("/api/route", get(handlers::find_route))
        .route("/api/paths", post(handlers::update_paths))
        .route("/api/paths/block", post(handlers::block_path))
        .route("/api/stats", get(handlers::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
