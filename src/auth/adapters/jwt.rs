//! HS256 JSON Web Token codec.

use crate::auth::{
    domain::{AccessToken, IssuedToken, TokenRejection},
    ports::{TokenCodec, TokenError, TokenResult},
};
use crate::config::{AuthConfig, ConfigError};
use crate::identity::domain::UserId;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Registered claims carried by every token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    iat: i64,
    nbf: i64,
    exp: i64,
    iss: String,
    aud: String,
}

/// Token codec producing HMAC-SHA256 signed JWTs.
///
/// Signature, issuer and audience are checked by `jsonwebtoken`. Expiry and
/// not-before are checked against the time passed to [`TokenCodec::verify`]
/// with a symmetric leeway, so an injected clock controls token validity.
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl: Duration,
    leeway: Duration,
}

impl JwtTokenCodec {
    /// Default token lifetime in seconds.
    pub const DEFAULT_TTL_SECS: i64 = 3600;

    /// Default tolerated clock skew in seconds.
    pub const DEFAULT_LEEWAY_SECS: i64 = 300;

    /// Creates a codec with the default lifetime and leeway.
    #[must_use]
    pub fn new(signing_key: &[u8], issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        let issuer_name = issuer.into();
        let audience_name = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.set_required_spec_claims(&["exp", "nbf", "sub", "iss", "aud"]);
        validation.set_issuer(&[issuer_name.as_str()]);
        validation.set_audience(&[audience_name.as_str()]);

        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
            validation,
            issuer: issuer_name,
            audience: audience_name,
            ttl: Duration::seconds(Self::DEFAULT_TTL_SECS),
            leeway: Duration::seconds(Self::DEFAULT_LEEWAY_SECS),
        }
    }

    /// Builds a codec from validated authentication settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the settings fail validation.
    pub fn from_config(config: &AuthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(
            Self::new(config.signing_key.as_bytes(), &config.issuer, &config.audience)
                .with_ttl(config.token_ttl()?)
                .with_leeway(config.leeway()?),
        )
    }

    /// Sets how long issued tokens remain valid.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the tolerated clock skew for expiry and not-before checks.
    #[must_use]
    pub const fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Returns the issuer placed in and required of every token.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Returns the audience placed in and required of every token.
    #[must_use]
    pub fn audience(&self) -> &str {
        &self.audience
    }
}

impl fmt::Debug for JwtTokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenCodec")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl", &self.ttl)
            .field("leeway", &self.leeway)
            .finish_non_exhaustive()
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, user_id: UserId, now: DateTime<Utc>) -> TokenResult<IssuedToken> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| TokenError::signing(std::io::Error::other("token expiry overflows")))?;
        let claims = Claims {
            sub: user_id.into_inner(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::signing)?;
        Ok(IssuedToken::new(
            AccessToken::new(token),
            user_id,
            now,
            expires_at,
        ))
    }

    fn verify(&self, token: &str, now: DateTime<Utc>) -> TokenResult<UserId> {
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| TokenError::Rejected(rejection_for(err.kind())))?
            .claims;

        let now_secs = now.timestamp();
        let leeway = self.leeway.num_seconds();
        if claims.nbf.saturating_sub(leeway) > now_secs {
            return Err(TokenRejection::NotYetValid.into());
        }
        if claims.exp.saturating_add(leeway) < now_secs {
            return Err(TokenRejection::Expired.into());
        }
        Ok(UserId::from_uuid(claims.sub))
    }
}

fn rejection_for(kind: &ErrorKind) -> TokenRejection {
    match kind {
        ErrorKind::InvalidSignature => TokenRejection::BadSignature,
        ErrorKind::ExpiredSignature => TokenRejection::Expired,
        ErrorKind::ImmatureSignature => TokenRejection::NotYetValid,
        ErrorKind::InvalidIssuer => TokenRejection::WrongIssuer,
        ErrorKind::InvalidAudience => TokenRejection::WrongAudience,
        _ => TokenRejection::Malformed,
    }
}
