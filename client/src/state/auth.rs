//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `RwSignal<AuthState>` and provides it as context; route
//! guards and user-aware components read it from there. The transitions below
//! are pure so the bootstrap, OAuth, and logout rules run in native tests
//! against `MemoryStorage`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::StaleTokenPolicy;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Profile, Registration, TokenPair};
use crate::util::storage::{KeyValueStore, clear_tokens, store_tokens};

pub const MIN_PASSWORD_LEN: usize = 4;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Profile>,
    pub loading: bool,
}

impl AuthState {
    /// State at page load, before the stored token has been checked.
    pub fn bootstrapping() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, profile: Profile) {
        self.user = Some(profile);
        self.loading = false;
    }

    /// Apply the startup profile lookup. `None` means no token was stored.
    ///
    /// On failure the stored tokens are cleared only under
    /// `StaleTokenPolicy::Clear`.
    pub fn finish_bootstrap(
        &mut self,
        outcome: Option<Result<Profile, ApiError>>,
        policy: StaleTokenPolicy,
        store: &impl KeyValueStore,
    ) {
        match outcome {
            Some(Ok(profile)) => self.sign_in(profile),
            Some(Err(_)) => {
                if policy == StaleTokenPolicy::Clear {
                    clear_tokens(store);
                }
                self.user = None;
                self.loading = false;
            }
            None => {
                self.user = None;
                self.loading = false;
            }
        }
    }

    /// Drop the session and both stored tokens, whatever the prior state.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        clear_tokens(store);
        self.user = None;
        self.loading = false;
    }
}

/// Redirect to `/login` once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

// =============================================================================
// LOGIN FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub member_id: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.member_id.is_none() && self.password.is_none()
    }
}

/// Validate login input before any network call.
///
/// # Errors
///
/// Returns per-field messages for a blank member id, a blank password, or a
/// password shorter than four characters.
pub fn validate_login(member_id: &str, password: &str) -> Result<Credentials, LoginFieldErrors> {
    let member_id = member_id.trim();
    let mut errors = LoginFieldErrors::default();
    if member_id.is_empty() {
        errors.member_id = Some("Enter your member ID.");
    }
    errors.password = password_error(password);

    if errors.is_empty() {
        Ok(Credentials { member_id: member_id.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Enter your password.")
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 4 characters.")
    } else {
        None
    }
}

// =============================================================================
// REGISTRATION FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFieldErrors {
    pub member_id: Option<&'static str>,
    pub user_name: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
}

impl RegisterFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.member_id.is_none() && self.user_name.is_none() && self.password.is_none() && self.confirm.is_none()
    }
}

/// Validate registration input before any network call.
///
/// # Errors
///
/// Returns per-field messages for blank fields, a short password, or a
/// confirmation that does not match.
pub fn validate_registration(
    member_id: &str,
    user_name: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, RegisterFieldErrors> {
    let member_id = member_id.trim();
    let user_name = user_name.trim();
    let mut errors = RegisterFieldErrors::default();
    if member_id.is_empty() {
        errors.member_id = Some("Enter a member ID.");
    }
    if user_name.is_empty() {
        errors.user_name = Some("Enter your name.");
    }
    errors.password = password_error(password);
    if errors.password.is_none() && password != confirm {
        errors.confirm = Some("Passwords do not match.");
    }

    if errors.is_empty() {
        Ok(Registration {
            member_id: member_id.to_owned(),
            user_name: user_name.to_owned(),
            password: password.to_owned(),
        })
    } else {
        Err(errors)
    }
}

// =============================================================================
// SIGN-IN COMPLETION
// =============================================================================

/// Tokens carried back on the `/login-success` redirect, if the access token is present.
pub fn oauth_tokens(access_token: Option<String>, refresh_token: Option<String>) -> Option<TokenPair> {
    let access_token = access_token.filter(|t| !t.trim().is_empty())?;
    Some(TokenPair { access_token, refresh_token: refresh_token.filter(|t| !t.trim().is_empty()) })
}

/// Persist tokens from a login or OAuth redirect.
pub fn accept_tokens(store: &impl KeyValueStore, tokens: &TokenPair) {
    store_tokens(store, tokens);
}

/// Apply the profile lookup that follows a fresh token, from the login form
/// or an OAuth redirect.
///
/// Unlike startup, a failure here always clears the new tokens.
///
/// # Errors
///
/// Passes the lookup error through so the page can redirect to `/login`.
pub fn finish_sign_in(
    state: &mut AuthState,
    outcome: Result<Profile, ApiError>,
    store: &impl KeyValueStore,
) -> Result<(), ApiError> {
    match outcome {
        Ok(profile) => {
            state.sign_in(profile);
            Ok(())
        }
        Err(e) => {
            state.logout(store);
            Err(e)
        }
    }
}
