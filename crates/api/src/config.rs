use std::str::FromStr;
use std::time::Duration;

use uptime_db::PoolConfig;

/// Error raised when an environment variable is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Database pool settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string (`DATABASE_URL`).
    pub url: String,
    /// Maximum open connections (default: `10`).
    pub max_open_conns: u32,
    /// Connections kept alive while idle (default: `5`).
    pub max_idle_conns: u32,
    /// Idle connection lifetime in seconds (default: `900`).
    pub max_idle_time_secs: u64,
}

impl DbConfig {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            database_url: self.url.clone(),
            max_connections: self.max_open_conns,
            min_connections: self.max_idle_conns,
            idle_timeout: Duration::from_secs(self.max_idle_time_secs),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Deployment environment label reported by `/health` (default: `development`).
    pub env: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `8080`                     |
    /// | `APP_ENV`               | `development`              |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `60`                       |
    /// | `DATABASE_URL`          | required                   |
    /// | `DB_MAX_OPEN_CONNS`     | `10`                       |
    /// | `DB_MAX_IDLE_CONNS`     | `5`                        |
    /// | `DB_MAX_IDLE_TIME_SECS` | `900`                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let cors_origins = string_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let db = DbConfig {
            url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            max_open_conns: parse_or(&lookup, "DB_MAX_OPEN_CONNS", 10, "u32")?,
            max_idle_conns: parse_or(&lookup, "DB_MAX_IDLE_CONNS", 5, "u32")?,
            max_idle_time_secs: parse_or(&lookup, "DB_MAX_IDLE_TIME_SECS", 900, "u64")?,
        };

        Ok(Self {
            host: string_or("HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 8080, "u16")?,
            env: string_or("APP_ENV", "development"),
            cors_origins,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 60, "u64")?,
            db,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value,
        }),
    }
}
