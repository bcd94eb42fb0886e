//! Reasons an access token is refused.

use std::fmt;

/// Why a presented access token was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenRejection {
    /// The token is not a well-formed signed token or lacks required claims.
    Malformed,
    /// The signature does not match the configured key.
    BadSignature,
    /// The token expired, allowing for clock leeway.
    Expired,
    /// The token was issued by another issuer.
    WrongIssuer,
    /// The token was minted for another audience.
    WrongAudience,
    /// The token's not-before time lies in the future.
    NotYetValid,
}

impl TokenRejection {
    /// Returns a stable machine-readable name for the reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::BadSignature => "bad_signature",
            Self::Expired => "expired",
            Self::WrongIssuer => "wrong_issuer",
            Self::WrongAudience => "wrong_audience",
            Self::NotYetValid => "not_yet_valid",
        }
    }
}

impl fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
