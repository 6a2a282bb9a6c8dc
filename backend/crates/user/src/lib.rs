//! User (Persistence) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, storage port, error mapper
//! - `application/` - User repository wrapper and signup service
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, request validation, router
//!
//! ## Error Model
//! - Unique-constraint violation on create → `409 User exists`
//! - Any other storage failure → `500 Failed to create user`
//! - Lookup without a match → `404 User not found`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{SignupCommand, UserService};
pub use domain::repository::{StoreError, StoreErrorKind, UserStore};
pub use error::{UserError, UserResult};
pub use infra::{InMemoryUserStore, PgUserStore};
pub use presentation::router::{user_router, user_router_generic};
