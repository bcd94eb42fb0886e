//! `PostgreSQL` adapters for identity lookup.

mod models;
mod repository;
mod schema;

pub use repository::PostgresUserDirectory;
