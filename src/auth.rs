//! JWT issuance and verification plus the axum bearer-token extractor.
//!
//! Tokens are HS256-signed with a shared secret. The token endpoint
//! issues them; the event-creation endpoint requires one via the
//! [`AuthenticatedUser`] extractor.

use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::error::ApiError;

/// Token type string used in token responses and `Authorization` headers.
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Claims carried by issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to.
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Expiration as a Unix timestamp.
    pub exp: i64,
    /// Issued-at as a Unix timestamp.
    pub iat: i64,
}

/// Signing material and claim configuration for the service's tokens.
#[derive(Clone)]
pub struct AuthSettings {
    secret: String,
    issuer: String,
    audience: String,
    ttl_secs: u64,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

impl AuthSettings {
    /// Creates auth settings from a shared secret and claim values.
    #[must_use]
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        ttl_secs: u64,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            ttl_secs,
        }
    }

    /// Validity period of issued tokens in seconds.
    #[must_use]
    pub const fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issues a signed token for `username`, valid from `now` for the
    /// configured period.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if signing fails.
    pub fn issue(&self, username: &str, now: DateTime<Utc>) -> Result<String, ApiError> {
        let iat = now.timestamp();
        let exp = iat.saturating_add(i64::try_from(self.ttl_secs).unwrap_or(i64::MAX));
        let claims = Claims {
            sub: username.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp,
            iat,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Internal(format!("token signing failed: {e}")))
    }

    /// Verifies a token's signature, expiry, issuer, and audience.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for any invalid token.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| ApiError::Unauthorized)
    }
}

/// Extractor proving the request carried a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Verified claims from the presented token.
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;
        let claims = state.auth.verify(token)?;
        Ok(Self { claims })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn settings() -> AuthSettings {
        AuthSettings::new("test-secret", "events-api", "events-api-clients", 1800)
    }

    #[test]
    fn issued_tokens_verify() {
        let auth = settings();
        let Ok(token) = auth.issue("jane", Utc::now()) else {
            panic!("issuing failed");
        };
        let Ok(claims) = auth.verify(&token) else {
            panic!("verification failed");
        };
        assert_eq!(claims.sub, "jane");
        assert_eq!(claims.iss, "events-api");
        assert_eq!(claims.exp - claims.iat, 1800);
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let auth = settings();
        let Ok(token) = auth.issue("jane", Utc::now() - Duration::hours(2)) else {
            panic!("issuing failed");
        };
        assert!(matches!(auth.verify(&token), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let auth = settings();
        assert!(matches!(
            auth.verify("not.a.token"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let other = AuthSettings::new("other-secret", "events-api", "events-api-clients", 1800);
        let Ok(token) = other.issue("jane", Utc::now()) else {
            panic!("issuing failed");
        };
        assert!(matches!(settings().verify(&token), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn debug_redacts_the_secret() {
        let rendered = format!("{:?}", settings());
        assert!(!rendered.contains("test-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
