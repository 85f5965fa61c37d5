use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::any::Any;

use super::models::ErrorBody;
use crate::video::LookupError;

impl LookupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Renders a handler panic as the standard 500 body
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%detail, "request handler panicked");
    LookupError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_id_is_400() {
        let response = LookupError::InvalidId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"success": false, "message": "invalid id"}));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = LookupError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "not found or inaccessible");
    }

    #[tokio::test]
    async fn panics_become_500_with_detail() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "Error: boom");
    }
}
