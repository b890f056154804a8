use std::fmt::Display;
use std::str::FromStr;

use holonet_catalog::{DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT};

/// Database used when `DATABASE_URL` is not set: a local SQLite file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db";

/// Process configuration, read once at startup.
///
/// | Env Var                | Default                       |
/// |------------------------|-------------------------------|
/// | `HOST`                 | `0.0.0.0`                     |
/// | `PORT`                 | `3000`                        |
/// | `DATABASE_URL`         | `sqlite:///tmp/holonet.db`    |
/// | `CORS_ORIGINS`         | `http://localhost:5173`       |
/// | `REQUEST_TIMEOUT_SECS` | `30`                          |
/// | `CATALOG_BASE_URL`     | `https://www.swapi.tech/api`  |
/// | `CATALOG_PAGE_LIMIT`   | `30`                          |
/// | `CATALOG_TIMEOUT_SECS` | `10`                          |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Comma-separated in `CORS_ORIGINS`; blank entries are dropped.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub catalog: CatalogConfig,
}

/// Where `/people-population` reads from.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// People fetched per ingestion call.
    pub page_limit: u32,
    /// Per-request timeout for listing and detail calls.
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Read every setting from the environment.
    ///
    /// Panics on a value that is set but does not parse, so a typo in
    /// deployment fails at boot rather than at first use.
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: parse_env_or("PORT", 3000),
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL.to_string()),
            cors_origins,
            request_timeout_secs: parse_env_or("REQUEST_TIMEOUT_SECS", 30),
            catalog: CatalogConfig::from_env(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("CATALOG_BASE_URL", DEFAULT_BASE_URL.to_string()),
            page_limit: parse_env_or("CATALOG_PAGE_LIMIT", DEFAULT_PAGE_LIMIT),
            timeout_secs: parse_env_or("CATALOG_TIMEOUT_SECS", 10),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key}={raw:?} is not valid: {e}")),
        Err(_) => default,
    }
}
