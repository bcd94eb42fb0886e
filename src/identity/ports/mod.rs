//! Port contracts for identity lookup.

pub mod directory;

pub use directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
