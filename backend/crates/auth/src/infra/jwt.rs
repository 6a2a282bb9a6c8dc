//! JWT Token Issuer (HS256)

use std::time::Duration;

use chrono::Utc;
use kernel::contract::user::UserDto;
use platform::jwt::{JwtError, JwtKeys};

use crate::domain::token::{AuthResponse, TokenClaims, TokenIssuer};

#[derive(Debug, Clone)]
pub struct JwtTokenIssuer {
    keys: JwtKeys,
    ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            keys: JwtKeys::hs256(secret),
            ttl,
        }
    }

    pub fn claims_for(&self, user: &UserDto) -> TokenClaims {
        let iat = Utc::now().timestamp();
        TokenClaims {
            sub: user.id,
            address: user.address.clone(),
            iat,
            exp: iat.saturating_add(i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX)),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &UserDto) -> Result<AuthResponse, JwtError> {
        let token = self.keys.sign(&self.claims_for(user))?;
        Ok(AuthResponse { token })
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, JwtError> {
        self.keys.verify(token)
    }
}
