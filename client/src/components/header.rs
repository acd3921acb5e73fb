//! Top bar shared by the authenticated pages.

use leptos::prelude::*;

use crate::components::user_nav::UserNav;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header-bar">
            <div class="header-bar__left">
                <a class="header-bar__logo" href="/">
                    <span class="header-bar__title">"Tsunami Prediction"</span>
                    <span class="header-bar__subtitle">"Prediction Service"</span>
                </a>
            </div>
            <div class="header-bar__right">
                <a
                    class="header-bar__refresh"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        #[cfg(feature = "hydrate")]
                        {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    }
                >
                    "Refresh"
                </a>
                <UserNav/>
            </div>
        </header>
    }
}
