//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client for backend calls.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Clone is required by Axum; inner fields are Arc-wrapped or cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with an HTTP client using the configured backend timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::DEFAULT_BACKEND_TIMEOUT_SECS;

    /// State pointing both backend URLs at `backend_url`.
    pub fn state_for(backend_url: &str) -> AppState {
        let config = ServerConfig {
            port: 0,
            backend_url: backend_url.to_owned(),
            backend_public_url: backend_url.to_owned(),
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
        };
        AppState::new(config).expect("test http client should build")
    }

    /// Serve `router` on an ephemeral local port and return its base URL.
    pub async fn spawn(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}")
    }
}
