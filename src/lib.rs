//! Taskward: ownership-scoped task lifecycle service.
//!
//! Authenticated users create, read, update and delete their own tasks.
//! Every operation takes the caller's identity explicitly and refuses access
//! to tasks owned by anyone else.
//!
//! # Architecture
//!
//! Taskward follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`,
//!   signed tokens)
//!
//! # Modules
//!
//! - [`task`]: Task entity, task store and the lifecycle service
//! - [`identity`]: User references and the directory that resolves them
//! - [`auth`]: Credential checks and access token issue and verification
//! - [`config`]: Layered settings for the gateway and the database pool

pub mod auth;
pub mod config;
pub mod identity;
pub mod task;
