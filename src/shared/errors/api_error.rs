use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::app_error::AppError;
use crate::log_error;

/// Error payload returned by every HTTP endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub errors: Vec<String>,
    pub path: String,
}

/// An [`AppError`] bound to the request path it occurred on
#[derive(Debug)]
pub struct ApiError {
    pub error: AppError,
    pub path: String,
}

impl ApiError {
    pub fn new(error: AppError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        status_for(&self.error)
    }
}

/// HTTP status for a domain or infrastructure error
pub fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::ValidationError(_) | AppError::InvalidInput(_) | AppError::AlreadyExists(_) => {
            StatusCode::BAD_REQUEST
        }
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log_error!("{} failed: {}", self.path, self.error);
        }

        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            errors: self.error.client_messages(),
            path: self.path,
        };

        (status, Json(body)).into_response()
    }
}
