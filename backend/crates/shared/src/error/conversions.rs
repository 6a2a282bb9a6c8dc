//! Error conversions and the problem-details wire body
//!
//! Both services serialize [`AppError`] as an RFC 7807 style JSON body.
//! The gateway parses the same body back when the user API rejects a call,
//! so the shape lives here as [`Problem`].

use serde::{Deserialize, Serialize};

use super::app_error::AppError;

/// RFC 7807 Problem Details body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_url: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl From<&AppError> for Problem {
    fn from(err: &AppError) -> Self {
        Self {
            type_url: format!("https://httpstatuses.io/{}", err.status_code()),
            title: err.kind().as_str().to_string(),
            status: err.status_code(),
            detail: err.message().to_string(),
            errors: err.details().to_vec(),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(Problem::from(&self))).into_response()
    }
}
