//! Shared Kernel - Service-crossing minimal core
//!
//! This crate contains the "smallest core" shared by the gateway and api:
//! - Common error types and result aliases
//! - Typed ID wrappers
//! - Wire contracts between the gateway and the user API
//! - Boundary validation helpers
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across both services.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod contract {
    pub mod user;
}
pub mod id;
pub mod validation;
