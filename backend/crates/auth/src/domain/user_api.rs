//! User API port
//!
//! The gateway owns no user storage; every read and write goes through this
//! interface to the api service.

use kernel::contract::user::{CreateUserRequest, UserDto, UserLookup};

use crate::error::AuthResult;

#[trait_variant::make(UserApi: Send)]
pub trait LocalUserApi {
    /// Create a user, failing with the api's conflict / generic outcome
    async fn sign_up(&self, request: &CreateUserRequest) -> AuthResult<UserDto>;

    /// Fetch a single user, failing with not-found when absent
    async fn get_user(&self, lookup: &UserLookup) -> AuthResult<UserDto>;
}
