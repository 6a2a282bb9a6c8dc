//! Persistence Port
//!
//! The storage adapter reports failures as a closed [`StoreErrorKind`] so the
//! error mapper can match on it exhaustively instead of inspecting driver
//! messages.

use std::fmt;

use kernel::id::UserId;

use crate::domain::entity::User;
use crate::domain::value_object::{Email, UserName, WalletAddress};

/// Create payload: `{address, userName, email, profile: {create: {firstName, lastName}}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub address: WalletAddress,
    pub user_name: UserName,
    pub email: Option<Email>,
    pub profile: NestedCreate<NewProfile>,
}

/// Nested one-to-one create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedCreate<T> {
    pub create: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Unique lookup criteria; every present field must match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCriteria {
    pub id: Option<UserId>,
    pub address: Option<WalletAddress>,
}

impl UserCriteria {
    pub fn by_id(id: UserId) -> Self {
        Self {
            id: Some(id),
            address: None,
        }
    }

    pub fn by_address(address: WalletAddress) -> Self {
        Self {
            id: None,
            address: Some(address),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.address.is_none()
    }

    pub fn matches(&self, user: &User) -> bool {
        self.id.is_none_or(|id| id == user.id)
            && self.address.is_none_or(|address| address == user.address)
    }
}

/// Closed set of storage failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// A unique constraint rejected the write
    UniqueViolation,
    /// Connection, pool or I/O failure
    Unavailable,
    Other,
}

/// Storage failure as reported by an adapter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    /// Vendor error code (SQLSTATE for PostgreSQL)
    pub code: Option<String>,
    pub message: String,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, code: Option<String>, message: impl fmt::Display) -> Self {
        Self {
            kind,
            code,
            message: message.to_string(),
        }
    }
}

/// User storage
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore {
    /// Insert the user and its profile atomically
    async fn insert(&self, new_user: &NewUser) -> Result<User, StoreError>;

    /// Find the single user matching `criteria`
    async fn find_unique(&self, criteria: &UserCriteria) -> Result<Option<User>, StoreError>;
}
