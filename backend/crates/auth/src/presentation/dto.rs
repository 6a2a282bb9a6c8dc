//! API DTOs (Data Transfer Objects)
//!
//! Unknown fields (such as a client-supplied `address`) are dropped during
//! deserialization. Required strings default to empty so that a missing
//! field is reported by validation together with every other problem.

use kernel::validation::{ValidationErrors, Validator};
use serde::Deserialize;

use crate::application::{LoginInput, SignUpInput};

pub use crate::domain::token::AuthResponse;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub user_name: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl SignUpRequest {
    pub fn validate(self) -> Result<SignUpInput, ValidationErrors> {
        let mut v = Validator::new();
        v.not_empty("message", &self.message)
            .not_empty("signature", &self.signature)
            .not_empty("userName", &self.user_name);
        if let Some(email) = &self.email {
            v.email("email", email);
        }
        v.finish()?;

        Ok(SignUpInput {
            message: self.message,
            signature: self.signature,
            user_name: self.user_name,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub signature: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<LoginInput, ValidationErrors> {
        let mut v = Validator::new();
        v.not_empty("message", &self.message)
            .not_empty("signature", &self.signature);
        v.finish()?;

        Ok(LoginInput {
            message: self.message,
            signature: self.signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_ignores_client_address() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"message":"m","signature":"s","userName":"johndoe","address":"0xdead"}"#,
        )
        .unwrap();
        let input = req.validate().unwrap();
        assert_eq!(input.user_name, "johndoe");
        assert_eq!(input.email, None);
    }

    #[test]
    fn test_sign_up_reports_every_missing_field() {
        let req: SignUpRequest = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(
            err.reasons(),
            [
                "message should not be empty",
                "signature should not be empty",
                "userName should not be empty",
                "email must be an email",
            ]
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"message":"m"}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.reasons(), ["signature should not be empty"]);
    }
}
