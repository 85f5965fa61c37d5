pub mod errors;
pub mod handlers;
pub mod models;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::video::VideoInfoService;

/// Shared, read-only request state
pub struct AppState {
    pub service: VideoInfoService,
}

/// JSON API:
/// - GET /video/{id}          full metadata, formats and best picks
/// - GET /video/{id}/formats  formats and best picks only
/// - GET /video/{id}/basic    metadata only, without a format lookup
/// - GET /health
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/video/{video_id}", get(handlers::get_video))
        .route("/video/{video_id}/formats", get(handlers::get_video_formats))
        .route("/video/{video_id}/basic", get(handlers::get_basic_video_info))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(CatchPanicLayer::custom(errors::handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
