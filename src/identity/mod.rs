//! User identity lookup for taskward.
//!
//! Users are owned by an external identity provider. This module models the
//! small slice of that provider the task core depends on: a user reference
//! entity and a directory port that resolves user identifiers. It follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
