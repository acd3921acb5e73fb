//! Client configuration resolved at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so deployment knobs
//! are baked in from `TSUNAMI_*` variables when the crate is built. `App`
//! provides the resolved `ClientConfig` as context for pages and services.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_REALTIME_REFRESH_MS: u64 = 1000;

/// What to do with a stored access token whose profile lookup failed at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaleTokenPolicy {
    /// Stay signed out but leave the token in storage for a later retry.
    #[default]
    Keep,
    /// Remove both stored tokens.
    Clear,
}

/// Where query history is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryStore {
    /// `GET /history` / `POST /history` on the backend.
    #[default]
    Remote,
    /// Browser `localStorage`, keyed per member and capped.
    Local,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub stale_token_policy: StaleTokenPolicy,
    pub history_store: HistoryStore,
    pub history_limit: usize,
    pub realtime_refresh_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            stale_token_policy: StaleTokenPolicy::default(),
            history_store: HistoryStore::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            realtime_refresh_ms: DEFAULT_REALTIME_REFRESH_MS,
        }
    }
}

/// Errors from parsing a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown {key}: {value}")]
    UnknownValue { key: &'static str, value: String },
    #[error("invalid number for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

impl ClientConfig {
    /// Build config from the `TSUNAMI_*` variables captured at compile time.
    ///
    /// Invalid values fall back to defaults with a console warning rather than
    /// failing hydration.
    pub fn from_build_env() -> Self {
        match Self::from_values(&BuildValues {
            api_base: option_env!("TSUNAMI_API_BASE"),
            stale_token_policy: option_env!("TSUNAMI_STALE_TOKEN_POLICY"),
            history_store: option_env!("TSUNAMI_HISTORY_STORE"),
            history_limit: option_env!("TSUNAMI_HISTORY_LIMIT"),
            realtime_refresh_ms: option_env!("TSUNAMI_REALTIME_REFRESH_MS"),
        }) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("client config rejected, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build config from raw optional values. Missing values take defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an enum value is unknown or a number does not parse.
    pub fn from_values(values: &BuildValues<'_>) -> Result<Self, ConfigError> {
        let api_base = values
            .api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            api_base,
            stale_token_policy: parse_stale_token_policy(values.stale_token_policy)?,
            history_store: parse_history_store(values.history_store)?,
            history_limit: parse_number("TSUNAMI_HISTORY_LIMIT", values.history_limit, DEFAULT_HISTORY_LIMIT)?,
            realtime_refresh_ms: parse_number(
                "TSUNAMI_REALTIME_REFRESH_MS",
                values.realtime_refresh_ms,
                DEFAULT_REALTIME_REFRESH_MS,
            )?,
        })
    }

    /// Join the API base with an endpoint path such as `/member/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

/// Raw configuration inputs, one per `TSUNAMI_*` variable.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildValues<'a> {
    pub api_base: Option<&'a str>,
    pub stale_token_policy: Option<&'a str>,
    pub history_store: Option<&'a str>,
    pub history_limit: Option<&'a str>,
    pub realtime_refresh_ms: Option<&'a str>,
}

fn parse_stale_token_policy(raw: Option<&str>) -> Result<StaleTokenPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("keep").to_ascii_lowercase().as_str() {
        "keep" => Ok(StaleTokenPolicy::Keep),
        "clear" => Ok(StaleTokenPolicy::Clear),
        other => Err(ConfigError::UnknownValue { key: "TSUNAMI_STALE_TOKEN_POLICY", value: other.to_owned() }),
    }
}

fn parse_history_store(raw: Option<&str>) -> Result<HistoryStore, ConfigError> {
    match raw.map(str::trim).unwrap_or("remote").to_ascii_lowercase().as_str() {
        "remote" => Ok(HistoryStore::Remote),
        "local" => Ok(HistoryStore::Local),
        other => Err(ConfigError::UnknownValue { key: "TSUNAMI_HISTORY_STORE", value: other.to_owned() }),
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: Option<&str>, default: T) -> Result<T, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: v.to_owned() }),
    }
}
