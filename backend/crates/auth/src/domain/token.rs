//! Token Issuer port

use kernel::contract::user::UserDto;
use platform::jwt::JwtError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `{ token }` body returned by signup and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub sub: Uuid,
    pub address: String,
    pub iat: i64,
    pub exp: i64,
}

pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &UserDto) -> Result<AuthResponse, JwtError>;

    fn verify(&self, token: &str) -> Result<TokenClaims, JwtError>;
}
