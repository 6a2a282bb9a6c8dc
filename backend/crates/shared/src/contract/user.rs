//! User API wire contract
//!
//! JSON shapes exchanged between the gateway and the user API.
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `POST /user` body
///
/// `address` is always the verifier-recovered wallet address; the gateway
/// never forwards a client-supplied value here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// `GET /user` query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLookup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UserLookup {
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            address: None,
        }
    }

    pub fn by_address(address: impl Into<String>) -> Self {
        Self {
            id: None,
            address: Some(address.into()),
        }
    }
}

/// User as returned by the user API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub user_name: String,
    pub address: String,
    pub email: Option<String>,
    pub profile: Option<ProfileDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_wire_names() {
        let req = CreateUserRequest {
            address: "0xabc".to_string(),
            user_name: "johndoe".to_string(),
            email: Some("johndoe@gmail.com".to_string()),
            first_name: None,
            last_name: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userName"], "johndoe");
        assert!(json.get("firstName").is_none());
    }

    #[test]
    fn test_create_user_request_missing_fields_default_to_empty() {
        let req: CreateUserRequest = serde_json::from_str(r#"{"userName":"johndoe"}"#).unwrap();
        assert_eq!(req.address, "");
        assert_eq!(req.email, None);
    }

    #[test]
    fn test_user_lookup_skips_absent_fields() {
        let lookup = UserLookup::by_address("0xabc");
        let json = serde_json::to_value(&lookup).unwrap();
        assert_eq!(json, serde_json::json!({ "address": "0xabc" }));
    }
}
