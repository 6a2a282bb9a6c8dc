//! User Name Value Object
//!
//! Public handle chosen at signup. Stored as entered (after NFKC and trim);
//! uniqueness is enforced by the database on the stored value.

use std::fmt;

use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserNameError {
    #[error("should not be empty")]
    Empty,

    #[error("is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("cannot contain whitespace")]
    ContainsWhitespace,

    #[error("cannot contain control characters")]
    ControlCharacter,
}

/// Validated user name
///
/// # Invariants
/// - NFKC normalized and trimmed
/// - 1..=USER_NAME_MAX_LENGTH characters
/// - No whitespace or control characters
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized = input.as_ref().nfkc().collect::<String>().trim().to_string();

        if normalized.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = normalized.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if normalized.chars().any(char::is_whitespace) {
            return Err(UserNameError::ContainsWhitespace);
        }
        if normalized.chars().any(char::is_control) {
            return Err(UserNameError::ControlCharacter);
        }

        Ok(Self(normalized))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(UserName::new("johndoe").unwrap().as_str(), "johndoe");
        assert_eq!(UserName::new("  John_Doe ").unwrap().as_str(), "John_Doe");
        // Fullwidth letters fold under NFKC
        assert_eq!(UserName::new("ｊｏｈｎ").unwrap().as_str(), "john");
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(UserName::new("").unwrap_err(), UserNameError::Empty);
        assert_eq!(UserName::new("   ").unwrap_err(), UserNameError::Empty);
        assert_eq!(
            UserName::new("john doe").unwrap_err(),
            UserNameError::ContainsWhitespace
        );
        assert_eq!(
            UserName::new("john\u{0007}").unwrap_err(),
            UserNameError::ControlCharacter
        );
        assert!(matches!(
            UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)),
            Err(UserNameError::TooLong { .. })
        ));
    }
}
