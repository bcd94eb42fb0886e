//! Credential verification port.

use crate::auth::domain::Secret;
use crate::identity::domain::{EmailAddress, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential store operations.
pub type CredentialStoreResult<T> = Result<T, CredentialStoreError>;

/// Checks a login secret against stored credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the user registered under `email` when `secret` matches.
    ///
    /// Returns `None` both for an unknown email and for a wrong secret.
    async fn verify(
        &self,
        email: &EmailAddress,
        secret: &Secret,
    ) -> CredentialStoreResult<Option<UserId>>;
}

/// Errors returned by credential stores.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    /// Credentials are already registered for the email address.
    #[error("credentials already registered for {0}")]
    DuplicateEmail(EmailAddress),

    /// The backing store could not be reached.
    #[error("credential store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a connectivity error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Returns `true` when retrying the operation may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
