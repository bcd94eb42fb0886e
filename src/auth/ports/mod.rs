//! Port contracts for authentication.

pub mod credentials;
pub mod token;

pub use credentials::{CredentialStoreError, CredentialStoreResult, CredentialVerifier};
pub use token::{TokenCodec, TokenError, TokenResult};
