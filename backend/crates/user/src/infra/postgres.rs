//! PostgreSQL User Store

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Profile, User};
use crate::domain::repository::{NewUser, StoreError, StoreErrorKind, UserCriteria, UserStore};
use crate::domain::value_object::{Email, UserName, WalletAddress};

/// SQLSTATE `unique_violation`
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Classify a SQLSTATE code
pub fn kind_for_code(code: Option<&str>) -> StoreErrorKind {
    match code {
        Some(UNIQUE_VIOLATION) => StoreErrorKind::UniqueViolation,
        // Class 08: connection exception
        Some(code) if code.starts_with("08") => StoreErrorKind::Unavailable,
        _ => StoreErrorKind::Other,
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) => {
            let code = db.code().map(|c| c.into_owned());
            StoreError::new(kind_for_code(code.as_deref()), code, &err)
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::new(StoreErrorKind::Unavailable, None, &err),
        _ => StoreError::new(StoreErrorKind::Other, None, &err),
    }
}

const SELECT_USER: &str = r#"
    SELECT
        u.id,
        u.user_name,
        u.address,
        u.email,
        u.created_at,
        u.updated_at,
        p.id AS profile_id,
        p.first_name,
        p.last_name,
        p.location,
        p.created_at AS profile_created_at,
        p.updated_at AS profile_updated_at
    FROM users u
    LEFT JOIN profiles p ON p.user_id = u.id
"#;

impl UserStore for PgUserStore {
    async fn insert(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let now = Utc::now();
        let user_id = UserId::new();
        let profile_id = ProfileId::new();
        let profile = &new_user.profile.create;

        let mut tx = self.pool.begin().await.map_err(store_error)?;

        sqlx::query(
            r#"
            INSERT INTO users (id, user_name, address, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(new_user.user_name.as_str())
        .bind(new_user.address.to_checksum())
        .bind(new_user.email.as_ref().map(Email::as_str))
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(store_error)?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, user_id, first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            "#,
        )
        .bind(profile_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(profile.first_name.as_deref())
        .bind(profile.last_name.as_deref())
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(store_error)?;

        tx.commit().await.map_err(store_error)?;

        Ok(User {
            id: user_id,
            user_name: new_user.user_name.clone(),
            address: new_user.address,
            email: new_user.email.clone(),
            profile: Some(Profile {
                id: profile_id,
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
                location: None,
                created_at: now,
                updated_at: now,
            }),
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_unique(&self, criteria: &UserCriteria) -> Result<Option<User>, StoreError> {
        let query = format!(
            "{SELECT_USER} WHERE ($1::uuid IS NULL OR u.id = $1) AND ($2::text IS NULL OR u.address = $2)"
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(criteria.id.map(UserId::into_uuid))
            .bind(criteria.address.map(|a| a.to_checksum()))
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        row.map(UserRow::into_user).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    user_name: String,
    address: String,
    email: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    profile_id: Option<Uuid>,
    first_name: Option<String>,
    last_name: Option<String>,
    location: Option<String>,
    profile_created_at: Option<DateTime<Utc>>,
    profile_updated_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> Result<User, StoreError> {
        let address = WalletAddress::parse(&self.address).map_err(|e| {
            StoreError::new(StoreErrorKind::Other, None, format!("Invalid stored address: {e}"))
        })?;

        let profile = match (self.profile_id, self.profile_created_at, self.profile_updated_at) {
            (Some(id), Some(created_at), Some(updated_at)) => Some(Profile {
                id: ProfileId::from_uuid(id),
                first_name: self.first_name,
                last_name: self.last_name,
                location: self.location,
                created_at,
                updated_at,
            }),
            _ => None,
        };

        Ok(User {
            id: UserId::from_uuid(self.id),
            user_name: UserName::from_db(self.user_name),
            address,
            email: self.email.map(Email::from_db),
            profile,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_code() {
        assert_eq!(kind_for_code(Some("23505")), StoreErrorKind::UniqueViolation);
        assert_eq!(kind_for_code(Some("08006")), StoreErrorKind::Unavailable);
        assert_eq!(kind_for_code(Some("23503")), StoreErrorKind::Other);
        assert_eq!(kind_for_code(Some("P2002")), StoreErrorKind::Other);
        assert_eq!(kind_for_code(None), StoreErrorKind::Other);
    }

    #[test]
    fn test_pool_errors_are_unavailable() {
        let err = store_error(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, StoreErrorKind::Unavailable);
        assert_eq!(err.code, None);

        let err = store_error(sqlx::Error::RowNotFound);
        assert_eq!(err.kind, StoreErrorKind::Other);
    }
}
