//! Bearer token extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use axum::http::{HeaderMap, header};

const SCHEME: &str = "Bearer ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,

    #[error("Authorization header is not a bearer token")]
    Malformed,
}

/// Extract the bearer token from the `Authorization` header
///
/// The scheme is matched case-insensitively; the token itself must be non-empty.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    if value.len() < SCHEME.len() || !value[..SCHEME.len()].eq_ignore_ascii_case(SCHEME) {
        return Err(BearerError::Malformed);
    }

    let token = value[SCHEME.len()..].trim();
    if token.is_empty() {
        return Err(BearerError::Malformed);
    }
    Ok(token)
}
