//! Application Configuration
//!
//! Configuration for the gateway auth flows.

use std::env;
use std::fmt;
use std::time::Duration;

use platform::config::{AppEnv, ConfigError, parsed_or, required};
use platform::jwt;

/// Default access token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Upper bound for `JWT_TTL_SECS` (30 days)
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 3600;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Vec<u8>,
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Expected SIWE domain; any domain is accepted when unset
    pub siwe_domain: Option<String>,
    /// Base URL of the user API
    pub user_api_url: String,
    /// Request timeout for user API calls
    pub user_api_timeout: Duration,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("siwe_domain", &self.siwe_domain)
            .field("user_api_url", &self.user_api_url)
            .field("user_api_timeout", &self.user_api_timeout)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            siwe_domain: None,
            user_api_url: "http://localhost:3001".to_string(),
            user_api_timeout: Duration::from_secs(10),
        }
    }
}

impl AuthConfig {
    pub fn from_env(app_env: AppEnv) -> Result<Self, ConfigError> {
        Self::from_lookup(app_env, |name| env::var(name).ok())
    }

    /// `JWT_SECRET` (base64) is required in production and random locally
    pub fn from_lookup(
        app_env: AppEnv,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET").filter(|v| !v.trim().is_empty()) {
            Some(encoded) => jwt::decode_secret(&encoded).map_err(|e| ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: e.to_string(),
            })?,
            None if app_env.is_local() => jwt::random_secret(),
            None => return Err(ConfigError::Missing("JWT_SECRET")),
        };
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: "decoded secret is empty".to_string(),
            });
        }

        let ttl_secs = parsed_or(&lookup, "JWT_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        if ttl_secs == 0 || ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::Invalid {
                name: "JWT_TTL_SECS",
                reason: format!("must be between 1 and {MAX_TOKEN_TTL_SECS}"),
            });
        }
        let siwe_domain = lookup("SIWE_DOMAIN").filter(|v| !v.trim().is_empty());
        let user_api_url = if app_env.is_local() {
            lookup("USER_API_URL").unwrap_or(defaults.user_api_url)
        } else {
            required(&lookup, "USER_API_URL")?
        };
        let timeout_secs = parsed_or(
            &lookup,
            "USER_API_TIMEOUT_SECS",
            defaults.user_api_timeout.as_secs(),
        )?;

        Ok(Self {
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_secs),
            siwe_domain,
            user_api_url,
            user_api_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
