//! Login credentials.

use crate::identity::domain::EmailAddress;
use std::fmt;

/// Raw login secret.
///
/// The value is only reachable through [`Secret::expose`]; `Debug` output is
/// redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wraps a raw secret.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw secret for hashing or comparison.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Email and secret presented at login.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: EmailAddress,
    secret: Secret,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub const fn new(email: EmailAddress, secret: Secret) -> Self {
        Self { email, secret }
    }

    /// Returns the login email.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the login secret.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }
}
