//! Domain Layer
//!
//! Ports consumed by the auth flows: signature verification, token issuance
//! and the user API.

pub mod token;
pub mod user_api;
pub mod verifier;

// Re-exports
pub use token::{AuthResponse, TokenClaims, TokenIssuer};
pub use user_api::UserApi;
pub use verifier::{SignatureVerifier, VerificationError, VerifiedIdentity};
