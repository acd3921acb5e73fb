//! Host server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("invalid number for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },

    /// A URL variable is not an absolute http(s) URL.
    #[error("invalid URL for {key}: {value}")]
    InvalidUrl { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL the `/api` proxy forwards to. No trailing slash.
    pub backend_url: String,
    /// Base URL browsers are redirected to for OAuth entry. No trailing slash.
    pub backend_public_url: String,
    pub backend_timeout: Duration,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8080`
    /// - `BACKEND_PUBLIC_URL`: defaults to `BACKEND_URL`
    /// - `BACKEND_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a number or URL is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a number or URL is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_number("PORT", get("PORT"), DEFAULT_PORT)?;
        let backend_url = parse_url("BACKEND_URL", get("BACKEND_URL"))?.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let backend_public_url =
            parse_url("BACKEND_PUBLIC_URL", get("BACKEND_PUBLIC_URL"))?.unwrap_or_else(|| backend_url.clone());
        let timeout_secs = parse_number("BACKEND_TIMEOUT_SECS", get("BACKEND_TIMEOUT_SECS"), DEFAULT_BACKEND_TIMEOUT_SECS)?;

        Ok(Self { port, backend_url, backend_public_url, backend_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}

fn parse_url(key: &'static str, raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { key, value });
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
