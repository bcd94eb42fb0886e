//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or extracted.
    #[error("configuration error: {0}")]
    Figment(Box<figment::Error>),

    /// A required section has not been filled in.
    #[error("configuration section '{section}' is not configured")]
    NotConfigured {
        /// Section name, for example `database`.
        section: &'static str,
    },

    /// A field holds an unusable value.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// Dotted field path, for example `auth.signing_key`.
        field: &'static str,
        /// What is wrong with the value.
        reason: String,
    },

    /// The connection pool could not be built.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
