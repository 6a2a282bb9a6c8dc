//! Auth Error Types
//!
//! This module provides gateway error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::Problem;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationErrors;
use platform::jwt::JwtError;
use thiserror::Error;

use crate::domain::verifier::VerificationError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Request body failed boundary validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// SIWE verification failed (signup surfaces the cause)
    #[error(transparent)]
    Verification(#[from] VerificationError),

    /// Login failure, missing/invalid bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// The user API answered with an error status
    #[error("{message}")]
    UserApi {
        status: u16,
        message: String,
        details: Vec<String>,
    },

    /// The user API could not be reached or answered garbage
    #[error("User service unavailable: {0}")]
    Upstream(String),

    /// Token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Verification(_) | AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::UserApi { status, .. } => ErrorKind::from_status(*status),
            AuthError::Upstream(_) => ErrorKind::BadGateway,
            AuthError::Token(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures keep their cause out of the response body.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(errors) => AppError::from(errors.clone()),
            AuthError::UserApi {
                message, details, ..
            } => AppError::new(self.kind(), message.clone()).with_details(details.clone()),
            AuthError::Upstream(_) => AppError::bad_gateway("User service unavailable"),
            AuthError::Token(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AuthError::Upstream(msg) => {
                tracing::error!(error = %msg, "User API unreachable");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token signing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UserApi { status, message, .. } if *status >= 500 => {
                tracing::error!(status, message = %message, "User API failure");
            }
            AuthError::Verification(e) => {
                tracing::warn!(error = %e, "SIWE verification failed");
            }
            AuthError::Unauthorized => {
                tracing::warn!("Unauthorized request");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<Problem> for AuthError {
    fn from(problem: Problem) -> Self {
        AuthError::UserApi {
            status: problem.status,
            message: problem.detail,
            details: problem.errors,
        }
    }
}

impl From<platform::bearer::BearerError> for AuthError {
    fn from(_: platform::bearer::BearerError) -> Self {
        AuthError::Unauthorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::from(ValidationErrors(vec!["x".into()])).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::from(VerificationError::AddressMismatch).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::Upstream("refused".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AuthError::Token(JwtError::Encoding("x".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_api_status_passes_through() {
        let problem = Problem {
            type_url: "https://httpstatuses.io/409".into(),
            title: "Conflict".into(),
            status: 409,
            detail: "User exists".into(),
            errors: vec![],
        };
        let err = AuthError::from(problem);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.to_app_error().message(), "User exists");
    }

    #[test]
    fn test_server_errors_hide_cause() {
        let app = AuthError::Internal("secret detail".into()).to_app_error();
        assert_eq!(app.message(), "Internal server error");

        let app = AuthError::Upstream("connection refused".into()).to_app_error();
        assert_eq!(app.message(), "User service unavailable");
    }

    #[test]
    fn test_verification_message_is_specific() {
        let app = AuthError::from(VerificationError::Expired).to_app_error();
        assert_eq!(app.message(), "Message expired");
    }
}
