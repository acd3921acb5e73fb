//! Login page supporting member credentials and Google/Kakao OAuth.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::state::auth::{AuthState, LoginFieldErrors, validate_login};
use crate::util::auth::redirect_browser;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check your member ID and password.";

/// Supported third-party sign-in providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Kakao,
}

impl OAuthProvider {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Kakao => "kakao",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Continue with Google",
            Self::Kakao => "Continue with Kakao",
        }
    }

    /// Browser path that starts this provider's OAuth flow.
    pub fn authorization_path(self) -> String {
        format!("/oauth2/authorization/{}", self.slug())
    }
}

/// Inline message for a failed login; an auth rejection reads as bad credentials.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => LOGIN_FAILED_MESSAGE.to_owned(),
        other => other.user_message(LOGIN_FAILED_MESSAGE),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let member_id = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginFieldErrors::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate_signed_in("/toolspage", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        info.set(String::new());
        let credentials = match validate_login(&member_id.get(), &password.get()) {
            Ok(credentials) => {
                field_errors.set(LoginFieldErrors::default());
                credentials
            }
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::session::login(auth, &config, &credentials).await {
                    Ok(_) => navigate("/toolspage", NavigateOptions::default()),
                    Err(e) => info.set(login_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, &config, &navigate);
    };

    let provider_button = |provider: OAuthProvider| {
        view! {
            <a
                href=provider.authorization_path()
                class=format!("login-button login-button--{}", provider.slug())
                on:click=move |ev| {
                    ev.prevent_default();
                    redirect_browser(&provider.authorization_path());
                }
            >
                {provider.label()}
            </a>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Tsunami Prediction"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Member ID"
                        autocomplete="username"
                        prop:value=move || member_id.get()
                        on:input=move |ev| member_id.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().member_id.map(|m| view! { <p class="login-field-error">{m}</p> })}
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().password.map(|m| view! { <p class="login-field-error">{m}</p> })}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                {provider_button(OAuthProvider::Google)}
                {provider_button(OAuthProvider::Kakao)}
                <p class="login-card__footer">
                    "No account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
