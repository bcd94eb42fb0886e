//! In-memory adapters for identity lookup.

mod directory;

pub use directory::InMemoryUserDirectory;
