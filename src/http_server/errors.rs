//! # API Errors
//!
//! Handlers never leak internal failure details; each endpoint has one
//! static message that the frontend shows as-is.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use thiserror::Error;

/// Errors returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid authentication token")]
    Unauthorized,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Portrait beautification failed")]
    BeautifyFailed,

    #[error("Layout optimization failed")]
    LayoutFailed,

    #[error("Image inpainting failed")]
    InpaintFailed,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthorized => 401,
            ApiError::InvalidRequest(_) => 422,
            ApiError::PayloadTooLarge => 413,
            ApiError::BeautifyFailed => 500,
            ApiError::LayoutFailed => 500,
            ApiError::InpaintFailed => 500,
        }
    }
}

/// Error body: `{"detail": ..., "code": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            detail: err.to_string(),
            code: err.status_code(),
        }
    }
}

/// Rejection half of every handler result
pub type ApiRejection = (StatusCode, Json<ErrorResponse>);

/// Result type for API handlers
pub type ApiResult<T> = Result<Json<T>, ApiRejection>;

impl From<ApiError> for ApiRejection {
    fn from(err: ApiError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(err)))
    }
}
