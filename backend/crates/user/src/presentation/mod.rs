//! Presentation Layer
//!
//! HTTP handlers, request validation, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::UserAppState;
pub use router::{user_router, user_router_generic};
