//! Bearer token to user resolution.

use crate::{errors::*, service::TokenService};
use m2dg_platform::{Platform, User};
use std::sync::Arc;
use tracing::warn;

/// Resolves the acting user behind a bearer token.
///
/// Every call does one token verification and one user lookup; nothing is cached.
pub struct IdentityResolver<P: Platform> {
    tokens: Arc<TokenService>,
    platform: Arc<P>,
}

impl<P: Platform> IdentityResolver<P> {
    pub fn new(tokens: Arc<TokenService>, platform: Arc<P>) -> Self {
        Self { tokens, platform }
    }

    pub async fn resolve(&self, token: &str) -> Result<User> {
        let subject = self.tokens.verify(token).map_err(|_| {
            warn!("Rejected bearer token");
            SessionError::Unauthenticated
        })?;

        match self.platform.find_user(&subject).await? {
            Some(user) => Ok(user),
            None => {
                warn!(user_id = %subject, "Token subject no longer exists");
                Err(SessionError::UserNotFound)
            }
        }
    }
}
