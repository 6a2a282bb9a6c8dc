//! User Service
//!
//! Signup orchestration: one log line, one create call.

use std::sync::Arc;

use crate::application::user_repository::UserRepository;
use crate::domain::entity::User;
use crate::domain::repository::{NestedCreate, NewProfile, NewUser, UserCriteria, UserStore};
use crate::domain::value_object::{Email, UserName, WalletAddress};
use crate::error::UserResult;

/// Validated signup input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCommand {
    pub address: WalletAddress,
    pub user_name: UserName,
    pub email: Option<Email>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl SignupCommand {
    /// Nest the profile fields under `profile.create`
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            address: self.address,
            user_name: self.user_name,
            email: self.email,
            profile: NestedCreate {
                create: NewProfile {
                    first_name: self.first_name,
                    last_name: self.last_name,
                },
            },
        }
    }
}

pub struct UserService<S>
where
    S: UserStore,
{
    repo: UserRepository<S>,
}

impl<S> UserService<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            repo: UserRepository::new(store),
        }
    }

    pub async fn signup(&self, command: SignupCommand) -> UserResult<User> {
        tracing::info!("Registering new user with address: {}", command.address);

        let new_user = command.into_new_user();
        self.repo.create(&new_user).await
    }

    pub async fn find(&self, criteria: &UserCriteria) -> UserResult<User> {
        self.repo.find(criteria).await
    }
}
