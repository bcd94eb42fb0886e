//! Domain types for credentials and access tokens.

mod credentials;
mod rejection;
mod token;

pub use credentials::{Credentials, Secret};
pub use rejection::TokenRejection;
pub use token::{AccessToken, IssuedToken};
