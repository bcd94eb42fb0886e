//! Validated email address used as the login identifier.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized email address in `local@domain` form.
///
/// Deserialization goes through [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Maximum stored length, matching the `users.email` column.
    const MAX_LENGTH: usize = 320;

    /// Creates a validated email address.
    ///
    /// The value is trimmed and lowercased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyEmail`] for blank input,
    /// [`IdentityDomainError::EmailTooLong`] past 320 characters, and
    /// [`IdentityDomainError::InvalidEmail`] when the value is not a single
    /// `local@domain` pair without whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(IdentityDomainError::EmptyEmail);
        }
        if normalized.chars().count() > Self::MAX_LENGTH {
            return Err(IdentityDomainError::EmailTooLong(raw));
        }

        let is_valid = normalized
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            })
            && !normalized.chars().any(char::is_whitespace);
        if !is_valid {
            return Err(IdentityDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = IdentityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
