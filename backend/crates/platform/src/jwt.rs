//! HS256 JSON Web Tokens

use std::fmt;

use base64::{Engine, engine::general_purpose};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngCore;
use serde::{Serialize, de::DeserializeOwned};

/// Length of generated secrets in bytes
pub const SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtError {
    #[error("token expired")]
    Expired,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("malformed token")]
    Malformed,

    #[error("failed to encode token: {0}")]
    Encoding(String),
}

/// Shared-secret signing and verification keys
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys").field("algorithm", &"HS256").finish_non_exhaustive()
    }
}

impl JwtKeys {
    pub fn hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| JwtError::Encoding(e.to_string()))
    }

    /// Verify signature and `exp`, returning the decoded claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, JwtError> {
        decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed,
            })
    }
}

/// Generate a random secret (development only)
pub fn random_secret() -> Vec<u8> {
    let mut secret = vec![0u8; SECRET_LENGTH];
    rand::rng().fill_bytes(&mut secret);
    secret
}

/// Decode a base64 (standard alphabet) secret
pub fn decode_secret(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(encoded.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Claims {
        sub: String,
        exp: i64,
    }

    fn claims(offset_secs: i64) -> Claims {
        Claims {
            sub: "user-1".to_string(),
            exp: Utc::now().timestamp() + offset_secs,
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let keys = JwtKeys::hs256(b"secret");
        let original = claims(3600);
        let token = keys.sign(&original).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded: Claims = keys.verify(&token).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_expired_token() {
        let keys = JwtKeys::hs256(b"secret");
        let token = keys.sign(&claims(-60)).unwrap();
        assert_eq!(keys.verify::<Claims>(&token).unwrap_err(), JwtError::Expired);
    }

    #[test]
    fn test_wrong_secret() {
        let token = JwtKeys::hs256(b"secret").sign(&claims(3600)).unwrap();
        let other = JwtKeys::hs256(b"another");
        assert_eq!(
            other.verify::<Claims>(&token).unwrap_err(),
            JwtError::InvalidSignature
        );
    }

    #[test]
    fn test_garbage_token() {
        let keys = JwtKeys::hs256(b"secret");
        assert_eq!(keys.verify::<Claims>("not-a-token").unwrap_err(), JwtError::Malformed);
    }

    #[test]
    fn test_secret_helpers() {
        assert_eq!(random_secret().len(), SECRET_LENGTH);
        assert_ne!(random_secret(), random_secret());
        assert_eq!(decode_secret("c2VjcmV0").unwrap(), b"secret");
        assert!(decode_secret("!!!").is_err());
    }
}
