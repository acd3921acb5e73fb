//! OAuth landing route: stores the delivered tokens and resolves the member.
//!
//! The backend redirects here as `/login-success?accessToken=..&refreshToken=..`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::ClientConfig;
use crate::state::auth::{AuthState, oauth_tokens};
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn LoginSuccessPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();
    let navigate = use_navigate();
    let message = RwSignal::new("Completing sign-in...".to_owned());
    let started = RwSignal::new(false);

    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        started.set(true);
        let tokens = query.with_untracked(|q| oauth_tokens(q.get("accessToken"), q.get("refreshToken")));
        let Some(tokens) = tokens else {
            leptos::logging::warn!("oauth redirect without access token");
            message.set("Sign-in did not return a token.".to_owned());
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let target = match crate::net::session::complete_oauth(auth, &config, &tokens).await {
                    Ok(_) => "/toolspage",
                    Err(_) => {
                        message.set("Sign-in failed. Please try again.".to_owned());
                        LOGIN_ROUTE
                    }
                };
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (tokens, auth, &config);
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <p class="login-message">{move || message.get()}</p>
            </div>
        </div>
    }
}
