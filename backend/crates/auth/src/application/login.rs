//! Login Use Case
//!
//! Every failure, whatever its cause, is reported as `Unauthorized` so a
//! caller cannot tell a bad signature from an unknown wallet. The cause is
//! only logged.

use std::sync::Arc;

use kernel::contract::user::UserLookup;

use crate::domain::token::{AuthResponse, TokenIssuer};
use crate::domain::user_api::UserApi;
use crate::domain::verifier::SignatureVerifier;
use crate::error::{AuthError, AuthResult};

/// Login input
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub message: String,
    pub signature: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserApi,
{
    verifier: Arc<dyn SignatureVerifier>,
    tokens: Arc<dyn TokenIssuer>,
    user_api: Arc<U>,
}

impl<U> LoginUseCase<U>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthResponse> {
        tracing::info!("Login user request");

        self.authenticate(input).await.map_err(|cause| {
            tracing::warn!(error = %cause, "Login rejected");
            AuthError::Unauthorized
        })
    }

    async fn authenticate(&self, input: LoginInput) -> AuthResult<AuthResponse> {
        let verified = self.verifier.verify(&input.message, &input.signature)?;

        let lookup = UserLookup::by_address(verified.checksum_address());
        let user = self.user_api.get_user(&lookup).await?;

        Ok(self.tokens.issue(&user)?)
    }
}
