//! Unified route-level error handling.
//!
//! Provides a unified `AppError` type. Route handlers return
//! `Result<T, AppError>`; the `IntoResponse` impl translates each variant
//! into an HTTP status with a plain-text body and logs server errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::mail::MailError;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Mail transport failed.
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Writes against a missing id surface the repository's NotFound;
        // treat it the same as a missing read so the policy is uniform
        if matches!(self, Self::Database(RepositoryError::NotFound)) {
            return (StatusCode::NOT_FOUND, "Not found").into_response();
        }

        let status = match &self {
            Self::Database(_) | Self::Mail(_) | Self::Session(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request error");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::NotFound(what) => format!("{what} not found"),
            _ => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Work".to_string());
        assert_eq!(err.to_string(), "Not found: Work");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("Work".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_write_to_missing_id_maps_to_404() {
        assert_eq!(
            get_status(AppError::Database(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_other_store_errors_map_to_500() {
        assert_eq!(
            get_status(AppError::Database(RepositoryError::Conflict(
                "slug".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
