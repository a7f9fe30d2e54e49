/// Environment-driven application configuration
///
/// Values are read once at startup, after `.env` has been loaded.
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SWAPI_BASE_URL: &str = "https://swapi.dev/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` selects the in-memory planet store
    pub database_url: Option<String>,
    pub database_pool_size: u32,
    pub swapi_base_url: String,
    pub swapi_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            database_url: None,
            database_pool_size: 10,
            swapi_base_url: DEFAULT_SWAPI_BASE_URL.to_string(),
            swapi_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_or("BIND_ADDR", &lookup, defaults.bind_addr)?;

        let database_url = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => Some(validate_database_url(url)?),
            None => None,
        };

        let database_pool_size =
            parse_or("DATABASE_POOL_SIZE", &lookup, defaults.database_pool_size)?;
        if database_pool_size == 0 {
            return Err(AppError::ConfigError(
                "DATABASE_POOL_SIZE must be at least 1".to_string(),
            ));
        }

        let swapi_base_url = lookup("SWAPI_BASE_URL")
            .unwrap_or(defaults.swapi_base_url)
            .trim_end_matches('/')
            .to_string();

        let swapi_timeout = timeout_secs("SWAPI_TIMEOUT_SECS", &lookup, defaults.swapi_timeout)?;
        let request_timeout =
            timeout_secs("REQUEST_TIMEOUT_SECS", &lookup, defaults.request_timeout)?;

        // A create must outlive its lookup, or an expired lookup drops the write
        if swapi_timeout >= request_timeout {
            return Err(AppError::ConfigError(format!(
                "SWAPI_TIMEOUT_SECS ({}) must be lower than REQUEST_TIMEOUT_SECS ({})",
                swapi_timeout.as_secs(),
                request_timeout.as_secs()
            )));
        }

        Ok(Self {
            bind_addr,
            database_url,
            database_pool_size,
            swapi_base_url,
            swapi_timeout,
            request_timeout,
        })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::ConfigError(format!("{} has invalid value '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}

fn timeout_secs<F>(key: &str, lookup: &F, default: Duration) -> AppResult<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs: u64 = parse_or(key, lookup, default.as_secs())?;
    if secs == 0 {
        return Err(AppError::ConfigError(format!("{} must be at least 1", key)));
    }
    Ok(Duration::from_secs(secs))
}

fn validate_database_url(url: String) -> AppResult<String> {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(AppError::ConfigError(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }
    Ok(url)
}
