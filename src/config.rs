use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://courses.db?mode=rwc";
pub const DEFAULT_LOG_FILTER: &str = "course_api=debug,tower_http=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid HOST '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`, default 5)
    pub database_max_connections: u32,
    /// Bind address (`HOST`, default 127.0.0.1)
    pub host: String,
    /// Bind port (`PORT`, default 3000)
    pub port: u16,
    /// tracing filter directives (`RUST_LOG`)
    pub log_filter: String,
}

impl Config {
    /// Reads the process environment after loading `.env`, if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Numeric values that
    /// fail to parse fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self.host.parse::<IpAddr>().map_err(|source| ConfigError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
