//! Layered configuration for taskward.
//!
//! Sources, highest priority first:
//!
//! 1. `TASKWARD_*` environment variables, with `__` separating sections
//!    (`TASKWARD_AUTH__SIGNING_KEY` sets `auth.signing_key`)
//! 2. `taskward.toml` in the working directory, when present
//! 3. Built-in defaults

mod auth;
mod database;
mod error;

pub use auth::AuthConfig;
pub use database::{DatabaseConfig, PgPool};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "taskward.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TASKWARD_";

/// Top-level taskward configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskwardConfig {
    /// Token signing and validation settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// `PostgreSQL` connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl TaskwardConfig {
    /// Loads configuration from defaults, `taskward.toml` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads configuration using `path` in place of `taskward.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::figment(path).extract()?)
    }

    /// Builds the provider chain without extracting it.
    #[must_use]
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests;
