use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;
use crate::utils::response::message;

pub const BAD_REQUEST_MESSAGE: &str = "Error, bad request";
pub const ALREADY_EXISTS_MESSAGE: &str = "Event already exists";
pub const NOT_FOUND_MESSAGE: &str = "Event not found";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate event: {0}")]
    DuplicateKey(String),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Database error")]
    DatabaseError(#[source] sqlx::Error),
}

impl AppError {
    /// The admin tool only distinguishes success from failure.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DuplicateKey(_) => "DUPLICATE_KEY",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) | AppError::DatabaseError(_) => BAD_REQUEST_MESSAGE,
            AppError::DuplicateKey(_) => ALREADY_EXISTS_MESSAGE,
            AppError::NotFound(_) => NOT_FOUND_MESSAGE,
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg)
            | AppError::DuplicateKey(msg)
            | AppError::NotFound(msg) => {
                error!(code = self.code(), message = %msg, "Request failed");
            }
            AppError::DatabaseError(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey { .. } => AppError::DuplicateKey(err.to_string()),
            StoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
            StoreError::Database(e) => AppError::DatabaseError(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        message(false, self.public_message(), self.status_code()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn store_errors_map_to_public_messages() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let duplicate: AppError = StoreError::DuplicateKey {
            name: "Talk".to_string(),
            date,
        }
        .into();
        let missing: AppError = StoreError::NotFound {
            name: "Talk".to_string(),
            date,
        }
        .into();

        assert_eq!(duplicate.public_message(), ALREADY_EXISTS_MESSAGE);
        assert_eq!(missing.public_message(), NOT_FOUND_MESSAGE);
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_do_not_leak_details() {
        let err: AppError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert_eq!(err.public_message(), BAD_REQUEST_MESSAGE);
    }
}
