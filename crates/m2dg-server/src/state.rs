use anyhow::Result;
use chrono::Duration;
use m2dg_platform::{Clock, PlatformService, SystemClock};
use m2dg_sessions::{IdentityResolver, TokenService};
use m2dg_storage::RocksDbStorage;
use std::sync::Arc;

use crate::config::Config;

pub type Platform = PlatformService<RocksDbStorage>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub platform: Arc<Platform>,
    pub tokens: Arc<TokenService>,
    pub resolver: Arc<IdentityResolver<Platform>>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let storage = Arc::new(RocksDbStorage::open(&config.database_path)?);

        Ok(Self::with_storage(
            storage,
            config.jwt_secret.as_bytes(),
            Duration::seconds(config.access_token_ttl_seconds),
            Arc::new(SystemClock),
        ))
    }

    /// Wire services over an already opened store
    pub fn with_storage(
        storage: Arc<RocksDbStorage>,
        jwt_secret: &[u8],
        access_token_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let platform = Arc::new(PlatformService::new(storage, clock.clone()));
        let tokens = Arc::new(TokenService::new(jwt_secret, access_token_ttl, clock));
        let resolver = Arc::new(IdentityResolver::new(tokens.clone(), platform.clone()));

        AppState {
            platform,
            tokens,
            resolver,
        }
    }
}
