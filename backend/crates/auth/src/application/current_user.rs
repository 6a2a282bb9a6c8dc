//! Current User Use Case

use std::sync::Arc;

use kernel::contract::user::{UserDto, UserLookup};

use crate::domain::token::TokenClaims;
use crate::domain::user_api::UserApi;
use crate::error::AuthResult;

pub struct CurrentUserUseCase<U>
where
    U: UserApi,
{
    user_api: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserApi,
{
    pub fn new(user_api: Arc<U>) -> Self {
        Self { user_api }
    }

    /// Resolve the token subject through the user API
    pub async fn execute(&self, claims: &TokenClaims) -> AuthResult<UserDto> {
        tracing::info!("Get user: {}", claims.sub);
        self.user_api.get_user(&UserLookup::by_id(claims.sub)).await
    }
}
