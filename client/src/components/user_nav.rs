//! Signed-in user greeting with My Page and logout actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::session;
use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn UserNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let display_name = move || {
        auth.get()
            .user
            .map(|u| u.display_name().to_owned())
            .unwrap_or_else(|| "Guest".to_owned())
    };

    let on_logout = move |_| {
        session::logout(auth);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="user-nav">
            <span class="user-nav__welcome">{move || format!("Welcome, {}", display_name())}</span>
            <nav class="user-nav__links">
                <a class="user-nav__link" href="/mypage">"My Page"</a>
                <button class="user-nav__link user-nav__link--button" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </div>
    }
}
