//! REST API helpers for the prediction backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! No retry, backoff, or timeout beyond the browser's own. Each failure is
//! terminal for that request and surfaces as `ApiError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Credentials, MapsKey, PredictionRequest, PredictionResponse, Profile, RealtimeQuake, Registration, TokenPair,
};
use crate::config::ClientConfig;
use crate::state::history::HistoryEntry;

pub const TOKEN_PATH: &str = "/generateToken";
pub const ME_PATH: &str = "/member/me";
pub const JOIN_PATH: &str = "/member/join";
pub const PREDICT_PATH: &str = "/predict/tsunami";
pub const MAPS_KEY_PATH: &str = "/config/google-key";
pub const REALTIME_PATH: &str = "/earthquake/realtime";
pub const HISTORY_PATH: &str = "/history";

/// Decode a response body given its status.
///
/// Empty success bodies decode as JSON `null`, so `()` and `Option<T>`
/// targets work for endpoints that answer with no content.
#[cfg(any(test, feature = "hydrate"))]
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Accept any success body; used by endpoints whose reply text is not contractual.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::from_status(status, body))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
enum Method {
    Get,
    Post,
}

/// Issue one request and return the raw status and body text.
#[cfg(feature = "hydrate")]
async fn send(
    config: &ClientConfig,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(u16, String), ApiError> {
    use crate::util::storage::{BrowserStorage, access_token};
    use gloo_net::http::Request;

    let url = config.endpoint(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
    };
    builder = builder.header("Accept", "application/json");
    if let Some(token) = access_token(&BrowserStorage) {
        builder = builder.header("Authorization", &bearer_header(&token));
    }

    let request = match body {
        Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !(200..300).contains(&status) {
        log::warn!("{path} failed: status {status}");
    }
    Ok((status, text))
}

async fn get<T: DeserializeOwned>(config: &ClientConfig, path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, text) = send(config, Method::Get, path, None).await?;
        decode_response(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, path);
        Err(ApiError::Unavailable)
    }
}

async fn post<B: Serialize, T: DeserializeOwned>(config: &ClientConfig, path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let (status, text) = send(config, Method::Post, path, Some(body)).await?;
        decode_response(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, path, body);
        Err(ApiError::Unavailable)
    }
}

async fn post_ack<B: Serialize>(config: &ClientConfig, path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let (status, text) = send(config, Method::Post, path, Some(body)).await?;
        check_status(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, path, body);
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a token pair via `POST /generateToken`.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-success status, or bad body.
pub async fn generate_token(config: &ClientConfig, credentials: &Credentials) -> Result<TokenPair, ApiError> {
    post(config, TOKEN_PATH, credentials).await
}

/// Fetch the current member from `GET /member/me`. 401 maps to `Unauthorized`.
///
/// # Errors
///
/// Returns `ApiError` when the token is missing/expired or the call fails.
pub async fn fetch_me(config: &ClientConfig) -> Result<Profile, ApiError> {
    get(config, ME_PATH).await
}

/// Create an account via `POST /member/join`.
///
/// # Errors
///
/// Returns `ApiError` if the backend rejects the registration.
pub async fn register_member(config: &ClientConfig, registration: &Registration) -> Result<(), ApiError> {
    post_ack(config, JOIN_PATH, registration).await
}

/// Request a tsunami probability via `POST /predict/tsunami`.
///
/// # Errors
///
/// Returns `ApiError` on any failure; no retry is attempted.
pub async fn predict_tsunami(
    config: &ClientConfig,
    request: &PredictionRequest,
) -> Result<PredictionResponse, ApiError> {
    post(config, PREDICT_PATH, request).await
}

/// Fetch the map-provider key via `GET /config/google-key`.
///
/// # Errors
///
/// Returns `ApiError` if the key cannot be fetched or is empty.
pub async fn fetch_maps_key(config: &ClientConfig) -> Result<MapsKey, ApiError> {
    get(config, MAPS_KEY_PATH).await
}

/// Fetch the live earthquake feed via `GET /earthquake/realtime`.
///
/// # Errors
///
/// Returns `ApiError` on any failure.
pub async fn fetch_realtime(config: &ClientConfig) -> Result<Vec<RealtimeQuake>, ApiError> {
    let quakes: Option<Vec<RealtimeQuake>> = get(config, REALTIME_PATH).await?;
    Ok(quakes.unwrap_or_default())
}

/// Fetch the member's saved history via `GET /history`, newest first.
///
/// # Errors
///
/// Returns `ApiError` on any failure.
pub async fn fetch_history(config: &ClientConfig) -> Result<Vec<HistoryEntry>, ApiError> {
    let entries: Option<Vec<HistoryEntry>> = get(config, HISTORY_PATH).await?;
    Ok(entries.unwrap_or_default())
}

/// Persist one history entry via `POST /history`.
///
/// # Errors
///
/// Returns `ApiError` on any failure.
pub async fn save_history(config: &ClientConfig, entry: &HistoryEntry) -> Result<(), ApiError> {
    post_ack(config, HISTORY_PATH, entry).await
}
