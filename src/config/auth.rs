//! Authentication settings.

use super::ConfigError;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token signing and validation settings.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC key used to sign and verify access tokens.
    pub signing_key: String,
    /// Issuer written into and required of every token.
    pub issuer: String,
    /// Audience written into and required of every token.
    pub audience: String,
    /// Lifetime of issued tokens in seconds.
    pub token_ttl_secs: u64,
    /// Tolerated clock skew in seconds.
    pub leeway_secs: u64,
}

impl AuthConfig {
    /// Minimum signing key length in bytes.
    pub const MIN_SIGNING_KEY_BYTES: usize = 32;

    /// Checks that the settings can produce a working token codec.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.signing_key.len() < Self::MIN_SIGNING_KEY_BYTES {
            return Err(ConfigError::InvalidValue {
                field: "auth.signing_key",
                reason: format!("must be at least {} bytes", Self::MIN_SIGNING_KEY_BYTES),
            });
        }
        if self.issuer.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.issuer",
                reason: "must not be empty".to_owned(),
            });
        }
        if self.audience.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.audience",
                reason: "must not be empty".to_owned(),
            });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.token_ttl_secs",
                reason: "must be positive".to_owned(),
            });
        }
        Ok(())
    }

    /// Returns the token lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the value does not fit a
    /// duration.
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        seconds("auth.token_ttl_secs", self.token_ttl_secs)
    }

    /// Returns the tolerated clock skew.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the value does not fit a
    /// duration.
    pub fn leeway(&self) -> Result<Duration, ConfigError> {
        seconds("auth.leeway_secs", self.leeway_secs)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_key: String::new(),
            issuer: "taskward".to_owned(),
            audience: "taskward-api".to_owned(),
            token_ttl_secs: 3600,
            leeway_secs: 300,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("signing_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

fn seconds(field: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(|| ConfigError::InvalidValue {
            field,
            reason: format!("{secs} seconds is out of range"),
        })
}
