//! Unified error handling for the administrative API.
//!
//! All failures are terminal for the request: one error, one response.
//! Unexpected store/collaborator failures are logged server-side and
//! surfaced uniformly as 500 without leaking internal detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::extract::ExtractError;
use crate::services::identity::IdentityError;

/// Application-level error type for the administrative API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(RepositoryError),

    /// Identity provider call failed (transport/protocol, not a bad token).
    #[error("Identity provider error: {0}")]
    Identity(#[from] IdentityError),

    /// Document text extraction failed.
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No resolvable identity on the request.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resolved identity lacks the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Missing or invalid required input.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Write conflicts with an existing row (e.g., duplicate name).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => Self::NotFound("record not found".to_owned()),
            RepositoryError::Conflict(msg) => Self::Conflict(msg),
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server errors go to Sentry; the current request span carries the
        // operation tag.
        if matches!(
            self,
            Self::Database(_) | Self::Internal(_) | Self::Identity(_) | Self::Extract(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) | Self::Identity(_) | Self::Extract(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
        };

        // Don't expose internal error details to clients
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("course 123".to_owned());
        assert_eq!(err.to_string(), "Not found: course 123");

        let err = AppError::BadRequest("name is required".to_owned());
        assert_eq!(err.to_string(), "Bad request: name is required");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            status_of(AppError::NotFound("x".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Unauthorized("x".to_owned())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::Forbidden("x".to_owned())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::BadRequest("x".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Conflict("x".to_owned())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::Internal("x".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let err = AppError::from(crate::db::RepositoryError::NotFound);
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_conflict_maps_to_409() {
        let err = AppError::from(crate::db::RepositoryError::Conflict("dup".to_owned()));
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_errors_do_not_leak_detail() {
        let err = AppError::Internal("connection refused at 10.0.0.5".to_owned());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Body carries the generic message only; detail stays in the logs.
    }
}
