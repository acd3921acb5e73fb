//! `/api/*` pass-through to the prediction backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls same-origin `/api/...`; this handler strips the
//! prefix and replays the request against `BACKEND_URL` with the method,
//! query, body, and the auth/content headers the backend reads. Upstream
//! status and body come back unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures are ours to report: they become `502` with a JSON
//! `{"message": ...}` body the client already knows how to read.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Request headers replayed to the backend.
const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or did not answer in time.
    #[error("backend request failed: {0}")]
    Upstream(String),

    /// The backend answered but its body could not be read.
    #[error("backend response unreadable: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "api proxy failure");
        let body = serde_json::json!({ "message": "Prediction service is unavailable." });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Backend URL for a proxied `path` and optional raw query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Forward one `/api/{*path}` request and relay the backend's answer.
///
/// # Errors
///
/// Returns `ProxyError` (rendered as `502`) on transport failure.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.backend_url, &path, query.as_deref());
    tracing::debug!(%method, %url, "proxying api request");

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "backend returned server error");
    }

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
