//! User Error Types
//!
//! Domain outcomes of the user API, integrated with `kernel::error::AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationErrors;
use thiserror::Error;

use crate::domain::repository::StoreError;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Persistence failure other than a uniqueness conflict
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<StoreError>,
    },

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl UserError {
    pub fn generic(message: impl Into<String>, source: StoreError) -> Self {
        UserError::Generic {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::NotFound(_) => ErrorKind::NotFound,
            UserError::Conflict(_) => ErrorKind::Conflict,
            UserError::Generic { .. } => ErrorKind::InternalServerError,
            UserError::Validation(_) => ErrorKind::BadRequest,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            UserError::Validation(errors) => AppError::from(errors.clone()),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            UserError::Generic {
                message,
                source: Some(source),
            } => {
                tracing::error!(
                    error = %source,
                    code = source.code.as_deref().unwrap_or("-"),
                    "{message}"
                );
            }
            UserError::Generic { message, .. } => {
                tracing::error!("{message}");
            }
            UserError::Conflict(msg) => {
                tracing::info!(reason = %msg, "User create rejected");
            }
            _ => {
                tracing::debug!(error = %self, "User API error");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::StoreErrorKind;

    #[test]
    fn test_status_codes() {
        assert_eq!(UserError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(UserError::Conflict("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            UserError::generic("x", StoreError::new(StoreErrorKind::Other, None, "boom"))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            UserError::from(ValidationErrors(vec!["r".into()])).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_app_error_hides_store_details() {
        let err = UserError::generic(
            "Failed to create user",
            StoreError::new(StoreErrorKind::Unavailable, None, "connection refused"),
        );
        let app = err.to_app_error();
        assert_eq!(app.message(), "Failed to create user");
        assert!(app.details().is_empty());
    }

    #[test]
    fn test_validation_keeps_reasons() {
        let err = UserError::from(ValidationErrors(vec!["userName: should not be empty".into()]));
        let app = err.to_app_error();
        assert_eq!(app.details(), ["userName: should not be empty"]);
    }
}
