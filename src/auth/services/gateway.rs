//! Login and token verification.

use crate::auth::{
    domain::{AccessToken, Credentials, IssuedToken, TokenRejection},
    ports::{CredentialStoreError, CredentialVerifier, TokenCodec, TokenError},
};
use crate::identity::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Errors returned by the authentication gateway.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The email is unknown or the secret does not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The presented token was refused.
    #[error("token rejected: {0}")]
    TokenRejected(TokenRejection),

    /// The credential store failed.
    #[error(transparent)]
    CredentialStore(#[from] CredentialStoreError),

    /// A token could not be minted.
    #[error(transparent)]
    Token(TokenError),
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Rejected(reason) => Self::TokenRejected(reason),
            other @ TokenError::Signing(_) => Self::Token(other),
        }
    }
}

impl AuthError {
    /// Returns `true` when retrying the operation may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::CredentialStore(err) => err.is_transient(),
            Self::InvalidCredentials | Self::TokenRejected(_) | Self::Token(_) => false,
        }
    }
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Verifies credentials, mints access tokens and resolves tokens to callers.
pub struct AuthenticationGateway<V, T, C>
where
    V: CredentialVerifier,
    T: TokenCodec,
    C: Clock + Send + Sync,
{
    verifier: Arc<V>,
    codec: Arc<T>,
    clock: Arc<C>,
}

impl<V, T, C> Clone for AuthenticationGateway<V, T, C>
where
    V: CredentialVerifier,
    T: TokenCodec,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            verifier: Arc::clone(&self.verifier),
            codec: Arc::clone(&self.codec),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<V, T, C> AuthenticationGateway<V, T, C>
where
    V: CredentialVerifier,
    T: TokenCodec,
    C: Clock + Send + Sync,
{
    /// Creates a new authentication gateway.
    #[must_use]
    pub const fn new(verifier: Arc<V>, codec: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            verifier,
            codec,
            clock,
        }
    }

    /// Exchanges credentials for a signed access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown email and for
    /// a wrong secret alike, and store or signing failures unchanged.
    #[instrument(skip_all)]
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<IssuedToken> {
        let Some(user_id) = self
            .verifier
            .verify(credentials.email(), credentials.secret())
            .await?
        else {
            warn!("login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let issued = self.codec.issue(user_id, self.clock.utc())?;
        info!(user_id = %user_id, expires_at = %issued.expires_at(), "access token issued");
        Ok(issued)
    }

    /// Resolves an access token to the caller it identifies.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenRejected`] with the reason the token was
    /// refused.
    #[instrument(skip_all)]
    pub fn authenticate(&self, token: &AccessToken) -> AuthResult<UserId> {
        match self.codec.verify(token.as_str(), self.clock.utc()) {
            Ok(caller) => {
                debug!(caller = %caller, "token accepted");
                Ok(caller)
            }
            Err(err) => {
                warn!(error = %err, "token refused");
                Err(err.into())
            }
        }
    }
}
