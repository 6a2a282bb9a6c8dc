//! In-memory user store
//!
//! Enforces the same uniqueness rules as the database schema and reports
//! violations with the PostgreSQL SQLSTATE, so it can stand in for
//! [`super::PgUserStore`] in tests and local runs.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{ProfileId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::{Profile, User};
use crate::domain::repository::{NewUser, StoreError, StoreErrorKind, UserCriteria, UserStore};
use crate::infra::postgres::UNIQUE_VIOLATION;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn conflict(constraint: &str) -> StoreError {
        StoreError::new(
            StoreErrorKind::UniqueViolation,
            Some(UNIQUE_VIOLATION.to_string()),
            format!("duplicate key value violates unique constraint \"{constraint}\""),
        )
    }
}

impl UserStore for InMemoryUserStore {
    async fn insert(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        for existing in users.iter() {
            if existing.user_name == new_user.user_name {
                return Err(Self::conflict("users_user_name_key"));
            }
            if existing.address == new_user.address {
                return Err(Self::conflict("users_address_key"));
            }
            if new_user.email.is_some() && existing.email == new_user.email {
                return Err(Self::conflict("users_email_key"));
            }
        }

        let now = Utc::now();
        let profile = &new_user.profile.create;
        let user = User {
            id: UserId::new(),
            user_name: new_user.user_name.clone(),
            address: new_user.address,
            email: new_user.email.clone(),
            profile: Some(Profile {
                id: ProfileId::new(),
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
                location: None,
                created_at: now,
                updated_at: now,
            }),
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        Ok(user)
    }

    async fn find_unique(&self, criteria: &UserCriteria) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| criteria.matches(user)).cloned())
    }
}
