use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use mailbrief::api::ErrorBody;
use mailbrief::PipelineError;

/// Error returned by REST handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 404 `{"error":"Email not found"}`.
    NotFound,
    /// 400, e.g. a non-integer id in the path.
    BadRequest(String),
    /// 500 `{"error":"Failed to <action>","message":"<cause>"}`.
    Failed {
        action: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Maps a pipeline failure; `action` completes "Failed to ...".
    pub fn from_pipeline(action: &'static str, err: PipelineError) -> Self {
        match err {
            PipelineError::NotFound { .. } => ApiError::NotFound,
            other => ApiError::Failed {
                action,
                message: other.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::NotFound => ErrorBody::new("Email not found"),
            ApiError::BadRequest(message) => ErrorBody::new("Invalid email id").with_message(message),
            ApiError::Failed { action, message } => {
                tracing::error!(%message, "Failed to {}", action);
                ErrorBody::new(format!("Failed to {}", action)).with_message(message)
            }
        };
        (status, Json(body)).into_response()
    }
}
