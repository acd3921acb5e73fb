//! Member page: profile summary and saved query history.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::history_panel::HistoryPanel;
use crate::config::ClientConfig;
use crate::net::history_sync::HISTORY_FAILED_MESSAGE;
use crate::net::session;
use crate::state::auth::AuthState;
use crate::state::history::HistoryState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn MyPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    install_unauth_redirect(auth, use_navigate());

    let history = RwSignal::new(HistoryState::default());
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if requested.get_untracked() {
            return;
        }
        requested.set(true);
        history.update(HistoryState::begin_load);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::history_sync::load_history(
                    &config,
                    &crate::util::storage::BrowserStorage,
                    &user.member_id,
                )
                .await;
                history.try_update(|h| match outcome {
                    Ok(entries) => h.replace(entries),
                    Err(e) => h.fail(e.user_message(HISTORY_FAILED_MESSAGE)),
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, &config);
            history.update(|h| h.fail(HISTORY_FAILED_MESSAGE.to_owned()));
        }
    });

    // The unauthenticated redirect above takes over once the user is cleared.
    let on_logout = move |_| session::logout(auth);

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <div class="my-page"><p>"Loading..."</p></div> }
        >
            <div class="my-page">
                <Header/>
                <section class="my-page__profile">
                    <h1>"My Page"</h1>
                    {move || {
                        auth.get()
                            .user
                            .map(|user| {
                                view! {
                                    <dl>
                                        <dt>"Member ID"</dt>
                                        <dd>{user.member_id.clone()}</dd>
                                        <dt>"Name"</dt>
                                        <dd>{user.display_name().to_owned()}</dd>
                                    </dl>
                                }
                            })
                    }}
                    <a class="my-page__link" href="/toolspage">"Back to tools"</a>
                    <button class="my-page__logout" on:click=on_logout>"Logout"</button>
                </section>
                <HistoryPanel history=history/>
            </div>
        </Show>
    }
}
