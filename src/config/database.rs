//! Database settings.

use super::ConfigError;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Connection pool shared by the `PostgreSQL` adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL` connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL, for example `postgres://user@localhost/taskward`.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
        }
    }
}

impl DatabaseConfig {
    /// Returns `true` when a connection URL has been provided.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Builds a connection pool and opens its initial connections.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] without a URL,
    /// [`ConfigError::InvalidValue`] for a zero pool size and
    /// [`ConfigError::Pool`] when the database cannot be reached.
    pub fn connect(&self) -> Result<PgPool, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "database",
            });
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections",
                reason: "must be positive".to_owned(),
            });
        }

        let pool = Pool::builder()
            .max_size(self.max_connections)
            .build(ConnectionManager::<PgConnection>::new(self.url.as_str()))?;
        info!(max_connections = self.max_connections, "database pool ready");
        Ok(pool)
    }
}
