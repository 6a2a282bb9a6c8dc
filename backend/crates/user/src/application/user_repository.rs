//! User Repository
//!
//! Wraps a [`UserStore`] and maps its failures once, at this boundary.

use std::sync::Arc;

use kernel::validation::ValidationErrors;

use crate::domain::entity::User;
use crate::domain::error_mapper::{map_create_error, map_find_error, not_found};
use crate::domain::repository::{NewUser, UserCriteria, UserStore};
use crate::error::{UserError, UserResult};

pub struct UserRepository<S>
where
    S: UserStore,
{
    store: Arc<S>,
}

impl<S> UserRepository<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new_user: &NewUser) -> UserResult<User> {
        self.store.insert(new_user).await.map_err(map_create_error)
    }

    /// Find or fail with `NotFound`
    pub async fn find(&self, criteria: &UserCriteria) -> UserResult<User> {
        if criteria.is_empty() {
            return Err(UserError::Validation(ValidationErrors(vec![
                "id or address is required".to_string(),
            ])));
        }

        self.store
            .find_unique(criteria)
            .await
            .map_err(map_find_error)?
            .ok_or_else(not_found)
    }
}
