//! OAuth entry redirects.
//!
//! The backend owns the OAuth flow. These routes only bounce the browser to
//! the backend's public authorization URL so the login page can link to a
//! same-origin path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;

use crate::state::AppState;

pub const PROVIDERS: [&str; 2] = ["google", "kakao"];

/// Backend authorization URL for a supported provider.
pub fn oauth_redirect_target(public_base: &str, provider: &str) -> Option<String> {
    PROVIDERS
        .contains(&provider)
        .then(|| format!("{}/oauth2/authorization/{provider}", public_base.trim_end_matches('/')))
}

/// `GET /oauth2/authorization/{provider}`.
///
/// # Errors
///
/// `404` for providers the backend does not support.
pub async fn authorize(State(state): State<AppState>, Path(provider): Path<String>) -> Result<Redirect, StatusCode> {
    match oauth_redirect_target(&state.config.backend_public_url, &provider) {
        Some(target) => Ok(Redirect::temporary(&target)),
        None => {
            tracing::warn!(%provider, "unsupported oauth provider");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[cfg(test)]
#[path = "oauth_test.rs"]
mod tests;
