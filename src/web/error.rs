use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Validation and constraint failures are normally intercepted by
            // the handlers and re-rendered as form messages; this mapping is
            // the fallback for requests that bypass the forms.
            AppError::Validation(_) | AppError::Constraint(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::StorageUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("Request failed: {self}");
            return (status, "Server error".to_string()).into_response();
        }

        (status, self.to_string()).into_response()
    }
}
