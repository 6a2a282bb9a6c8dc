//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod jwt;
pub mod siwe;
pub mod user_client;

pub use jwt::JwtTokenIssuer;
pub use siwe::SiweVerifier;
pub use user_client::HttpUserApi;
