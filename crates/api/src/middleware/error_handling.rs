//! # Error Handling Middleware
//!
//! Maps domain-specific errors to HTTP status codes and JSON error bodies
//! so every endpoint fails the same way. Note that slot rejections are NOT
//! errors: the admission handler returns them as ordinary 200 decisions.
//! Only parse failures, missing resources, and internal faults land here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use drivetime_core::errors::DriveTimeError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `DriveTimeError` instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub DriveTimeError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            DriveTimeError::NotFound(_) => StatusCode::NOT_FOUND,
            DriveTimeError::Validation(_) => StatusCode::BAD_REQUEST,
            DriveTimeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `Result<T, DriveTimeError>` inside
/// handlers that return `Result<T, AppError>`.
impl From<DriveTimeError> for AppError {
    fn from(err: DriveTimeError) -> Self {
        AppError(err)
    }
}

/// Allows `?` on infrastructure results (store lock faults and the like),
/// wrapping them as internal errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(DriveTimeError::Internal(err))
    }
}
