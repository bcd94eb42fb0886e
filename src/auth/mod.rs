//! Authentication gateway for taskward.
//!
//! Turns login credentials into signed access tokens and access tokens back
//! into the [`UserId`](crate::identity::domain::UserId) of the caller. The
//! task core consumes only that identifier. Layout mirrors the other bounded
//! contexts:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The gateway service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
