//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Error body returned to clients: `{ "message": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Application-level errors with HTTP status mapping.
///
/// All failures are terminal for the request; there are no retries and no
/// partial-failure paths (every operation is a single document write).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m.as_str()),
            AppError::Forbidden(m) => (StatusCode::FORBIDDEN, m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.as_str()),
            AppError::Storage(m) => {
                error!(detail = %m, "storage operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage unavailable")
            }
        };
        let body = Json(ErrorResponse {
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("record not found".into()),
            _ => AppError::Storage(e.to_string()),
        }
    }
}

impl From<life_event_core::store::StoreError> for AppError {
    fn from(e: life_event_core::store::StoreError) -> Self {
        match e {
            life_event_core::store::StoreError::NotFound => {
                AppError::NotFound("record not found".into())
            }
            life_event_core::store::StoreError::Db(e) => AppError::from(e),
            life_event_core::store::StoreError::Payload(e) => AppError::Storage(e.to_string()),
        }
    }
}

impl From<life_event_core::directory::DirectoryError> for AppError {
    fn from(e: life_event_core::directory::DirectoryError) -> Self {
        match e {
            life_event_core::directory::DirectoryError::Db(e) => AppError::from(e),
        }
    }
}

impl From<life_event_core::auth::AuthError> for AppError {
    fn from(e: life_event_core::auth::AuthError) -> Self {
        match e {
            life_event_core::auth::AuthError::TokenError(msg) => AppError::Unauthorized(msg),
            life_event_core::auth::AuthError::DbError(e) => AppError::from(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        let cases = [
            (
                AppError::Unauthorized("unauthorized access".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::Forbidden("forbidden access".into()),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::NotFound("record not found".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Storage("connection refused".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn storage_errors_do_not_leak_detail() {
        let resp = AppError::Storage("password=hunter2 connection refused".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Body is the generic message, not the underlying driver error.
    }

    #[test]
    fn sqlx_row_not_found_maps_to_404() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
