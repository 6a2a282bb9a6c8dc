//! HTTP client for the user API
//!
//! Non-2xx answers carry a problem-details body; its status and detail are
//! passed through so the gateway reports the same outcome (409, 404, ...).

use std::time::Duration;

use kernel::contract::user::{CreateUserRequest, UserDto, UserLookup};
use kernel::error::conversions::Problem;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::domain::user_api::UserApi;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    base_url: String,
}

impl HttpUserApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AuthResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(response: Response) -> AuthResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| AuthError::Upstream(format!("Invalid user API response: {e}")));
        }

        match response.json::<Problem>().await {
            Ok(problem) => Err(AuthError::from(problem)),
            Err(_) => Err(AuthError::UserApi {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("User API error")
                    .to_string(),
                details: Vec::new(),
            }),
        }
    }
}

fn transport_error(err: reqwest::Error) -> AuthError {
    AuthError::Upstream(err.to_string())
}

impl UserApi for HttpUserApi {
    async fn sign_up(&self, request: &CreateUserRequest) -> AuthResult<UserDto> {
        let response = self
            .client
            .post(self.url("/user"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read(response).await
    }

    async fn get_user(&self, lookup: &UserLookup) -> AuthResult<UserDto> {
        let response = self
            .client
            .get(self.url("/user"))
            .query(lookup)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let api = HttpUserApi::new("http://localhost:3001/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.url("/user"), "http://localhost:3001/user");
    }
}
