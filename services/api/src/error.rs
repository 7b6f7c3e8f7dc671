use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use helia_common::error::HeliaError;

pub struct ApiError(pub HeliaError);

impl From<HeliaError> for ApiError {
    fn from(err: HeliaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HeliaError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            HeliaError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
