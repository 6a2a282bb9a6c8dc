//! Environment Configuration
//!
//! HTTP settings shared by every service binary. Values come from the process
//! environment (after `dotenvy` has loaded `.env`), but parsing goes through a
//! lookup closure so tests never touch real variables.

use std::env;
use std::str::FromStr;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    /// `local` or `test`
    Local,
    #[default]
    Production,
}

impl AppEnv {
    pub fn is_local(self) -> bool {
        self == Self::Local
    }
}

impl FromStr for AppEnv {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "local" | "test" => Self::Local,
            _ => Self::Production,
        })
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub env: AppEnv,
    pub port: u16,
    /// Global route prefix such as `v1` (empty for none)
    pub version: String,
    /// Public base URL, informational only
    pub base_url: Option<String>,
    pub cors_origins: Vec<String>,
}

impl HttpConfig {
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        Self::from_lookup(default_port, |name| env::var(name).ok())
    }

    pub fn from_lookup(
        default_port: u16,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let env = lookup("APP_ENV")
            .map(|v| v.parse::<AppEnv>().unwrap_or_default())
            .unwrap_or_default();

        let port = match lookup("HTTP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "HTTP_PORT",
                reason: e.to_string(),
            })?,
            None => default_port,
        };

        let version = lookup("HTTP_VERSION")
            .map(|v| v.trim().trim_matches('/').to_string())
            .unwrap_or_default();

        let base_url = lookup("HTTP_BASE_URL").filter(|v| !v.trim().is_empty());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            env,
            port,
            version,
            base_url,
            cors_origins,
        })
    }

    /// Route prefix to nest under, e.g. `/v1`
    pub fn prefix(&self) -> Option<String> {
        if self.version.is_empty() {
            None
        } else {
            Some(format!("/{}", self.version))
        }
    }
}

/// Read a required variable through `lookup`
pub fn required(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Read and parse an optional variable through `lookup`
pub fn parsed_or<T>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
