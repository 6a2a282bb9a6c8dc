//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod login;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
