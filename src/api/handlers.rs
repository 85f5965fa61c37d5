use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};
use std::sync::Arc;

use super::models::HealthResponse;
use super::AppState;
use crate::video::{BasicResponse, FormatsResponse, FullResponse, LookupError};

/// A segment axum cannot decode (e.g. invalid UTF-8) is an invalid id too
fn video_id_from(path: Result<Path<String>, PathRejection>) -> Result<String, LookupError> {
    match path {
        Ok(Path(video_id)) => Ok(video_id),
        Err(rejection) => {
            tracing::debug!("Rejected video id segment: {}", rejection);
            Err(LookupError::InvalidId)
        }
    }
}

/// GET /video/{video_id}
pub async fn get_video(
    path: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<FullResponse>, LookupError> {
    let video_id = video_id_from(path)?;
    tracing::debug!("Full info: '{}'", video_id);
    state.service.full(&video_id).await.map(Json)
}

/// GET /video/{video_id}/formats
pub async fn get_video_formats(
    path: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<FormatsResponse>, LookupError> {
    let video_id = video_id_from(path)?;
    tracing::debug!("Formats: '{}'", video_id);
    state.service.formats(&video_id).await.map(Json)
}

/// GET /video/{video_id}/basic
pub async fn get_basic_video_info(
    path: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<BasicResponse>, LookupError> {
    let video_id = video_id_from(path)?;
    tracing::debug!("Basic info: '{}'", video_id);
    state.service.basic(&video_id).await.map(Json)
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Video Info API is running",
    })
}
