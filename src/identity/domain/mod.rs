//! Domain model for user identity references.
//!
//! The task core never owns user lifecycle; it only needs stable identifiers
//! and enough user data to confirm existence.

mod email;
mod error;
mod ids;
mod user;

pub use email::EmailAddress;
pub use error::IdentityDomainError;
pub use ids::UserId;
pub use user::{PersistedUserData, User};
