//! Token codec port.

use crate::auth::domain::{IssuedToken, TokenRejection};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for token codec operations.
pub type TokenResult<T> = Result<T, TokenError>;

/// Mints and checks signed access tokens.
///
/// Both operations take the current time explicitly so that expiry is
/// evaluated against the caller's clock rather than the system clock.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    /// Mints a token identifying `user_id`, valid from `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] when the token cannot be produced.
    fn issue(&self, user_id: UserId, now: DateTime<Utc>) -> TokenResult<IssuedToken>;

    /// Verifies `token` at `now` and returns the user it identifies.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Rejected`] with the reason the token was refused.
    fn verify(&self, token: &str, now: DateTime<Utc>) -> TokenResult<UserId>;
}

/// Errors returned by token codecs.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// The token was refused.
    #[error("token rejected: {0}")]
    Rejected(TokenRejection),

    /// A token could not be signed.
    #[error("token signing failed: {0}")]
    Signing(Arc<dyn std::error::Error + Send + Sync>),
}

impl TokenError {
    /// Wraps a signing failure.
    pub fn signing(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Signing(Arc::new(err))
    }
}

impl From<TokenRejection> for TokenError {
    fn from(reason: TokenRejection) -> Self {
        Self::Rejected(reason)
    }
}
