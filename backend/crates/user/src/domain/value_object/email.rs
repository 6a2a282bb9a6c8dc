//! Email Value Object
//!
//! Basic structural validation only. Stored lowercased.

use std::fmt;

use kernel::validation::{EMAIL_MAX_LENGTH, is_email};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("should not be empty")]
    Empty,

    #[error("must be at most {EMAIL_MAX_LENGTH} characters")]
    TooLong,

    #[error("must be an email")]
    InvalidFormat,
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }
        if email.len() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong);
        }
        if !is_email(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("johndoe@gmail.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert_eq!(Email::new("").unwrap_err(), EmailError::Empty);
        assert_eq!(Email::new("userexample.com").unwrap_err(), EmailError::InvalidFormat);
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@example..com").is_err());
    }

    #[test]
    fn test_same_rule_as_request_validation() {
        use kernel::validation::Validator;

        let long_local = format!("{}@a.io", "l".repeat(65));
        for candidate in ["a@b..com", "john@gmail.com", "x@y", long_local.as_str()] {
            let mut v = Validator::new();
            v.email("email", candidate);
            assert_eq!(Email::new(candidate).is_ok(), v.is_valid(), "{candidate}");
        }
    }

    #[test]
    fn test_email_case_normalization() {
        let email = Email::new(" User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }
}
