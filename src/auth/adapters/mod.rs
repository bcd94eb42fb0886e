//! Adapter implementations of the authentication ports.

pub mod jwt;
pub mod memory;

pub use jwt::JwtTokenCodec;
pub use memory::InMemoryCredentialStore;
