//! Application Layer
//!
//! Repository wrapper and the signup service.

pub mod user_repository;
pub mod user_service;

// Re-exports
pub use user_repository::UserRepository;
pub use user_service::{SignupCommand, UserService};
