//! Sign Up Use Case
//!
//! Verifies the SIWE pair, creates the user under the recovered address and
//! issues a token. Failures keep their specific cause.

use std::sync::Arc;

use kernel::contract::user::CreateUserRequest;

use crate::domain::token::{AuthResponse, TokenIssuer};
use crate::domain::user_api::UserApi;
use crate::domain::verifier::SignatureVerifier;
use crate::error::AuthResult;

/// Sign up input
#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub message: String,
    pub signature: String,
    pub user_name: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserApi,
{
    verifier: Arc<dyn SignatureVerifier>,
    tokens: Arc<dyn TokenIssuer>,
    user_api: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserApi,
{
    pub fn new(
        verifier: Arc<dyn SignatureVerifier>,
        tokens: Arc<dyn TokenIssuer>,
        user_api: Arc<U>,
    ) -> Self {
        Self {
            verifier,
            tokens,
            user_api,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<AuthResponse> {
        tracing::info!("Signup user requested");

        let verified = self.verifier.verify(&input.message, &input.signature)?;

        // The recovered signer is the only address ever forwarded
        let request = CreateUserRequest {
            address: verified.checksum_address(),
            user_name: input.user_name,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
        };

        let user = self.user_api.sign_up(&request).await?;
        let response = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.id, address = %user.address, "User signed up");

        Ok(response)
    }
}
