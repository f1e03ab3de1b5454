//! JWT issuing and verification.

use crate::{errors::*, types::*};
use chrono::{Duration, SubsecRound};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use m2dg_platform::Clock;
use std::sync::Arc;
use tracing::debug;

/// Default access token lifetime: 15 minutes
pub const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: i64 = 900;

/// Signs and verifies HS256 access tokens.
///
/// The signing secret is fixed for the lifetime of the service. Rotating it
/// means building a new `TokenService`; tokens signed with the old secret
/// stop verifying immediately.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(secret: &[u8], default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            default_ttl,
            clock,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token for `subject` expiring `ttl` (or the default) from now.
    ///
    /// Claims carry whole seconds, so both instants are truncated and the
    /// reported `expires_at` is exactly the `exp` that `verify` enforces.
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<IssuedToken> {
        let now = self.clock.now().trunc_subsecs(0);
        let expires_at = now
            .checked_add_signed(ttl.unwrap_or(self.default_ttl))
            .ok_or(SessionError::TtlOutOfRange)?
            .trunc_subsecs(0);

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(IssuedToken {
            access_token,
            token_type: "bearer".to_string(),
            expires_at,
        })
    }

    /// Verify signature, structure and expiry, returning the subject.
    ///
    /// A token is valid strictly before its `exp`. All failures collapse to
    /// `InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // Expiry is checked below against the injected clock, without leeway
        validation.validate_exp = false;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                debug!(error = %e, "Token failed verification");
                SessionError::InvalidToken
            })?
            .claims;

        if claims.sub.is_empty() {
            debug!("Token has an empty subject");
            return Err(SessionError::InvalidToken);
        }

        let now_millis = self.clock.now().timestamp_millis();
        if now_millis >= claims.exp.saturating_mul(1000) {
            debug!(exp = claims.exp, "Token expired");
            return Err(SessionError::InvalidToken);
        }

        Ok(claims.sub)
    }
}
