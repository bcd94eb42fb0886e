//! In-memory credential store for tests and embedded use.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::auth::{
    domain::Secret,
    ports::{CredentialStoreError, CredentialStoreResult, CredentialVerifier},
};
use crate::identity::domain::{EmailAddress, User, UserId};

/// Thread-safe credential store keyed by email address.
///
/// Secrets are kept only as salted SHA-256 digests and compared in constant
/// time.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    entries: Arc<RwLock<HashMap<EmailAddress, StoredCredential>>>,
}

#[derive(Clone)]
struct StoredCredential {
    user_id: UserId,
    salt: [u8; 16],
    digest: [u8; 32],
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredential")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `secret` as the login secret for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::DuplicateEmail`] when the user's email
    /// already has credentials.
    pub fn register(&self, user: &User, secret: &Secret) -> CredentialStoreResult<()> {
        let mut entries = self.entries.write().map_err(|err| lock_error(&err))?;
        if entries.contains_key(user.email()) {
            return Err(CredentialStoreError::DuplicateEmail(user.email().clone()));
        }

        let salt = *Uuid::new_v4().as_bytes();
        entries.insert(
            user.email().clone(),
            StoredCredential {
                user_id: user.id(),
                salt,
                digest: salted_digest(&salt, secret),
            },
        );
        Ok(())
    }
}

#[async_trait]
impl CredentialVerifier for InMemoryCredentialStore {
    async fn verify(
        &self,
        email: &EmailAddress,
        secret: &Secret,
    ) -> CredentialStoreResult<Option<UserId>> {
        let entries = self.entries.read().map_err(|err| lock_error(&err))?;
        Ok(check_secret(entries.get(email), secret, salted_digest))
    }
}

/// Compared on a lookup miss so unknown emails cost one digest too.
const DECOY_SALT: [u8; 16] = [0; 16];
const DECOY_DIGEST: [u8; 32] = [0; 32];

fn check_secret(
    stored: Option<&StoredCredential>,
    secret: &Secret,
    mut digest: impl FnMut(&[u8; 16], &Secret) -> [u8; 32],
) -> Option<UserId> {
    let (salt, expected) = stored.map_or((&DECOY_SALT, &DECOY_DIGEST), |credential| {
        (&credential.salt, &credential.digest)
    });
    let candidate = digest(salt, secret);
    let matches: bool = candidate.as_slice().ct_eq(expected.as_slice()).into();
    stored.filter(|_| matches).map(|credential| credential.user_id)
}

fn salted_digest(salt: &[u8; 16], secret: &Secret) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(secret.expose().as_bytes());
    hasher.finalize().into()
}

fn lock_error(err: &impl fmt::Display) -> CredentialStoreError {
    CredentialStoreError::persistence(std::io::Error::other(err.to_string()))
}
