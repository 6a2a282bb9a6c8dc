//! Auth (Gateway) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Ports: signature verifier, token issuer, user API
//! - `application/` - Sign up, login and current-user use cases
//! - `infra/` - SIWE verifier, JWT issuer, HTTP user API client
//! - `presentation/` - HTTP handlers, DTOs, bearer middleware, router
//!
//! ## Features
//! - Sign-In with Ethereum (EIP-4361) signup and login
//! - HS256 access tokens (`sub` = user id, 1 hour by default)
//! - `GET /auth/user` behind `Authorization: Bearer`
//!
//! ## Security Model
//! - The address stored for a user is always the recovered signer
//! - Login failures are indistinguishable (`401 Unauthorized`)
//! - Optional SIWE domain binding via `SIWE_DOMAIN`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{HttpUserApi, JwtTokenIssuer, SiweVerifier};
pub use presentation::handlers::AuthAppState;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
