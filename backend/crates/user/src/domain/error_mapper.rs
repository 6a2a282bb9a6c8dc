//! Storage error → domain error
//!
//! Every storage failure lands in exactly one bucket. A unique-constraint
//! violation is a conflict; anything else is a generic failure whose driver
//! message stays in the log and never reaches the caller.

use crate::domain::repository::{StoreError, StoreErrorKind};
use crate::error::UserError;

pub const USER_EXISTS: &str = "User exists";
pub const CREATE_FAILED: &str = "Failed to create user";
pub const NOT_FOUND: &str = "User not found";
pub const FIND_FAILED: &str = "Failed to find user";

/// Map a failed create
pub fn map_create_error(err: StoreError) -> UserError {
    match err.kind {
        StoreErrorKind::UniqueViolation => UserError::Conflict(USER_EXISTS.to_string()),
        StoreErrorKind::Unavailable | StoreErrorKind::Other => UserError::generic(CREATE_FAILED, err),
    }
}

/// Map a failed lookup
pub fn map_find_error(err: StoreError) -> UserError {
    match err.kind {
        StoreErrorKind::UniqueViolation | StoreErrorKind::Unavailable | StoreErrorKind::Other => {
            UserError::generic(FIND_FAILED, err)
        }
    }
}

pub fn not_found() -> UserError {
    UserError::NotFound(NOT_FOUND.to_string())
}
