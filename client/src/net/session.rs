//! Session operations that combine REST calls with the auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local` tasks. Token persistence and state
//! transitions are delegated to `state::auth`; this module only sequences
//! the network calls and logs failures.

use leptos::prelude::*;

use super::api;
use super::error::ApiError;
use super::types::{Credentials, Profile, Registration, TokenPair};
use crate::config::ClientConfig;
use crate::state::auth::{AuthState, accept_tokens, finish_sign_in};
use crate::util::storage::{BrowserStorage, access_token};

/// Resolve the stored token into a session at page load.
pub async fn bootstrap(auth: RwSignal<AuthState>, config: ClientConfig) {
    let store = BrowserStorage;
    let outcome = if access_token(&store).is_some() {
        let result = api::fetch_me(&config).await;
        if let Err(e) = &result {
            leptos::logging::warn!("session bootstrap failed: {e}");
        }
        Some(result)
    } else {
        None
    };
    auth.update(|a| a.finish_bootstrap(outcome, config.stale_token_policy, &store));
}

async fn sign_in_with(auth: RwSignal<AuthState>, config: &ClientConfig, tokens: &TokenPair) -> Result<Profile, ApiError> {
    let store = BrowserStorage;
    accept_tokens(&store, tokens);
    let outcome = api::fetch_me(config).await;
    let profile = outcome.as_ref().ok().cloned();
    auth.try_update(|a| finish_sign_in(a, outcome, &store))
        .unwrap_or(Err(ApiError::Unavailable))?;
    profile.ok_or(ApiError::Unavailable)
}

/// Exchange credentials for tokens and load the member profile.
///
/// # Errors
///
/// Returns the first failing call's `ApiError`; tokens are cleared if the
/// profile lookup fails.
pub async fn login(auth: RwSignal<AuthState>, config: &ClientConfig, credentials: &Credentials) -> Result<Profile, ApiError> {
    let tokens = api::generate_token(config, credentials).await?;
    sign_in_with(auth, config, &tokens).await.inspect_err(|e| {
        leptos::logging::warn!("login profile lookup failed: {e}");
    })
}

/// Finish an OAuth redirect that delivered `tokens`.
///
/// # Errors
///
/// Returns `ApiError` if the delivered token does not resolve to a member.
pub async fn complete_oauth(auth: RwSignal<AuthState>, config: &ClientConfig, tokens: &TokenPair) -> Result<Profile, ApiError> {
    sign_in_with(auth, config, tokens).await.inspect_err(|e| {
        leptos::logging::warn!("oauth completion failed: {e}");
    })
}

/// Create an account. The user signs in separately afterwards.
///
/// # Errors
///
/// Returns `ApiError` if the backend rejects the registration.
pub async fn register(config: &ClientConfig, registration: &Registration) -> Result<(), ApiError> {
    api::register_member(config, registration).await
}

/// Drop the session and both stored tokens.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(|a| a.logout(&BrowserStorage));
}
