//! Boundary validation
//!
//! Request bodies are checked field by field before any use case runs.
//! Every failing field contributes one human-readable reason, so a single
//! 400 response lists all problems at once.

use std::fmt;

use crate::error::app_error::AppError;

/// Collected validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", .0.join("; "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn reasons(&self) -> &[String] {
        &self.0
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::bad_request("Validation failed").with_details(err.0)
    }
}

/// Accumulates reasons while a request is being checked
///
/// ```rust
/// use kernel::validation::Validator;
///
/// let mut v = Validator::new();
/// v.not_empty("message", "");
/// v.not_empty("signature", "0x12");
/// let err = v.finish().unwrap_err();
/// assert_eq!(err.reasons(), ["message should not be empty"]);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    reasons: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects empty or whitespace-only values
    pub fn not_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.reasons.push(format!("{field} should not be empty"));
        }
        self
    }

    /// Rejects values that are not shaped like `local@domain.tld`
    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !is_email(value.trim()) {
            self.reasons.push(format!("{field} must be an email"));
        }
        self
    }

    /// Records the error of a value-object constructor, keeping the value on success
    pub fn field<T, E: fmt::Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.reasons.push(format!("{field}: {e}"));
                None
            }
        }
    }

    /// Adds a reason unless `condition` holds
    pub fn ensure(&mut self, condition: bool, reason: impl Into<String>) -> &mut Self {
        if !condition {
            self.reasons.push(reason.into());
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.reasons.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.reasons))
        }
    }
}

/// Maximum email length (RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local-part length (RFC 5321)
pub const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

/// Structural email check shared by the gateway and the user API
pub fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > EMAIL_LOCAL_MAX_LENGTH {
        return false;
    }
    if local.contains(char::is_whitespace) {
        return false;
    }

    domain.contains('.')
        && !domain.starts_with(['.', '-'])
        && !domain.ends_with(['.', '-'])
        && !domain.contains("..")
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_collects_every_reason() {
        let mut v = Validator::new();
        v.not_empty("message", "  ").not_empty("signature", "");
        let parsed: Option<u32> = v.field("chainId", "abc".parse::<u32>());
        assert!(parsed.is_none());
        assert!(!v.is_valid());

        let err = v.finish().unwrap_err();
        assert_eq!(err.reasons().len(), 3);
        assert_eq!(err.reasons()[0], "message should not be empty");
        assert!(err.reasons()[2].starts_with("chainId: "));
    }

    #[test]
    fn test_valid_input_passes() {
        let mut v = Validator::new();
        v.not_empty("userName", "johndoe").ensure(true, "never added");
        let n = v.field("n", "42".parse::<u32>());
        assert_eq!(n, Some(42));
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_email() {
        let mut v = Validator::new();
        v.email("email", "johndoe@gmail.com");
        assert!(v.is_valid());

        for bad in ["", "johndoe", "john@", "@gmail.com", "john@gmail", "a@b@c.com"] {
            let mut v = Validator::new();
            v.email("email", bad);
            assert_eq!(v.finish().unwrap_err().reasons(), ["email must be an email"], "{bad}");
        }
    }

    #[test]
    fn test_is_email_limits() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        let long_total = format!("john@{}.com", "a".repeat(250));
        for bad in ["a@b..com", "a@-b.com", "a@b.com-", long_local.as_str(), long_total.as_str()] {
            assert!(!is_email(bad), "{bad}");
        }
        assert!(is_email(&format!("{}@example.com", "a".repeat(64))));
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = ValidationErrors(vec!["userName should not be empty".into()]).into();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.details(), ["userName should not be empty"]);
    }
}
