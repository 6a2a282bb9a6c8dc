//! User and Profile entities

use chrono::{DateTime, Utc};
use kernel::contract::user::{ProfileDto, UserDto};
use kernel::id::{ProfileId, UserId};

use crate::domain::value_object::{Email, UserName, WalletAddress};

/// Persisted user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub user_name: UserName,
    pub address: WalletAddress,
    pub email: Option<Email>,
    pub profile: Option<Profile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-to-one optional profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.into_uuid(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            location: profile.location,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_uuid(),
            user_name: user.user_name.to_string(),
            address: user.address.to_checksum(),
            email: user.email.map(Email::into_inner),
            profile: user.profile.map(ProfileDto::from),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
