//! Landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_start = move |_| {
        let target = if auth.get_untracked().is_authenticated() { "/toolspage" } else { "/login" };
        navigate(target, NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <div class="home-page__overlay">
                <h1>"Welcome"</h1>
                <p class="home-page__tagline">"Tsunami probability estimates for East Sea earthquakes."</p>
                <button class="home-page__cta" on:click=on_start>
                    {move || if auth.get().is_authenticated() { "Open Tools" } else { "Login" }}
                </button>
            </div>
        </div>
    }
}
