use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Minimum accepted length of `JWT_SECRET`, in bytes
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Longest accepted access token lifetime: 30 days
pub const MAX_ACCESS_TOKEN_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Server configuration
#[derive(Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_address: SocketAddr,

    /// Path to RocksDB database
    pub database_path: PathBuf,

    /// HS256 signing secret for access tokens
    pub jwt_secret: Zeroizing<String>,

    /// Access token lifetime (seconds)
    pub access_token_ttl_seconds: i64,

    /// CORS origins; `None` allows any origin
    pub allowed_origins: Option<Vec<String>>,

    /// Seed sample courts into an empty database on startup
    pub seed_sample_data: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("database_path", &self.database_path)
            .field("jwt_secret", &"<redacted>")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("allowed_origins", &self.allowed_origins)
            .field("seed_sample_data", &self.seed_sample_data)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address: SocketAddr = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| "127.0.0.1:8001".to_string())
            .parse()
            .context("BIND_ADDRESS must be a socket address")?;

        let database_path = lookup("DATABASE_PATH")
            .unwrap_or_else(|| "./data/m2dg.db".to_string())
            .into();

        let jwt_secret = Zeroizing::new(
            lookup("JWT_SECRET").context("JWT_SECRET environment variable required")?,
        );
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            anyhow::bail!("JWT_SECRET must be at least {MIN_JWT_SECRET_LENGTH} bytes");
        }

        let access_token_ttl_seconds: i64 = lookup("ACCESS_TOKEN_TTL_SECONDS")
            .unwrap_or_else(|| "900".to_string()) // 15 minutes
            .parse()
            .context("ACCESS_TOKEN_TTL_SECONDS must be an integer")?;
        if !(1..=MAX_ACCESS_TOKEN_TTL_SECONDS).contains(&access_token_ttl_seconds) {
            anyhow::bail!(
                "ACCESS_TOKEN_TTL_SECONDS must be between 1 and {MAX_ACCESS_TOKEN_TTL_SECONDS}"
            );
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect()
        });

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            None => true,
            Some(value) => parse_bool(&value).context("SEED_SAMPLE_DATA must be true or false")?,
        };

        Ok(Config {
            bind_address,
            database_path,
            jwt_secret,
            access_token_ttl_seconds,
            allowed_origins,
            seed_sample_data,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8001");
        assert_eq!(config.database_path, PathBuf::from("./data/m2dg.db"));
        assert_eq!(config.access_token_ttl_seconds, 900);
        assert!(config.allowed_origins.is_none());
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_secret_required_and_long_enough() {
        assert!(load(&[]).is_err());
        assert!(load(&[("JWT_SECRET", "short")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("JWT_SECRET", SECRET),
            ("BIND_ADDRESS", "0.0.0.0:9000"),
            ("ACCESS_TOKEN_TTL_SECONDS", "60"),
            ("ALLOWED_ORIGINS", "http://localhost:3000, https://m2dg.app"),
            ("SEED_SAMPLE_DATA", "false"),
        ])
        .unwrap();

        assert_eq!(config.bind_address.port(), 9000);
        assert_eq!(config.access_token_ttl_seconds, 60);
        assert_eq!(
            config.allowed_origins.unwrap(),
            vec!["http://localhost:3000", "https://m2dg.app"]
        );
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_ttl_upper_bound_is_inclusive() {
        let ttl = MAX_ACCESS_TOKEN_TTL_SECONDS.to_string();
        let config = load(&[
            ("JWT_SECRET", SECRET),
            ("ACCESS_TOKEN_TTL_SECONDS", ttl.as_str()),
        ])
        .unwrap();
        assert_eq!(config.access_token_ttl_seconds, MAX_ACCESS_TOKEN_TTL_SECONDS);

        let over = (MAX_ACCESS_TOKEN_TTL_SECONDS + 1).to_string();
        assert!(load(&[
            ("JWT_SECRET", SECRET),
            ("ACCESS_TOKEN_TTL_SECONDS", over.as_str()),
        ])
        .is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(load(&[("JWT_SECRET", SECRET), ("ACCESS_TOKEN_TTL_SECONDS", "0")]).is_err());
        assert!(load(&[
            ("JWT_SECRET", SECRET),
            ("ACCESS_TOKEN_TTL_SECONDS", "9000000000000")
        ])
        .is_err());
        assert!(load(&[("JWT_SECRET", SECRET), ("SEED_SAMPLE_DATA", "maybe")]).is_err());
        assert!(load(&[("JWT_SECRET", SECRET), ("BIND_ADDRESS", "nowhere")]).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();
        assert!(!format!("{config:?}").contains(SECRET));
    }
}
