//! Task lifecycle management for taskward.
//!
//! This module implements the ownership-scoped task core: creating tasks for
//! an authenticated caller, reading, updating and deleting them only on
//! behalf of their owner, and stamping completion. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
