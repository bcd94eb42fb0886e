//! Authentication services.

mod gateway;

pub use gateway::{AuthError, AuthResult, AuthenticationGateway};
