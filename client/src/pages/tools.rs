//! Tool page: map selection, prediction requests, and history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the prediction orchestrator. It owns the page-scoped signals
//! (`ToolState`, `QueryForm`, `PredictionState`, `HistoryState`), drives the
//! `Idle -> LoadingKey -> LoadingScript -> Ready` sequence, and hands each
//! prediction outcome back to `PredictionState` by `RequestId`.
//!
//! TRADE-OFFS
//! ==========
//! An in-flight prediction is cancelled on unmount rather than aborted; the
//! HTTP call still completes but its outcome is dropped.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::coordinate_panel::CoordinatePanel;
use crate::components::earthquake_modal::EarthquakeAlert;
use crate::components::header::Header;
use crate::components::history_panel::HistoryPanel;
use crate::components::map_view::MapView;
use crate::components::query_panel::QueryPanel;
use crate::components::realtime_feed::RealtimeFeed;
use crate::config::ClientConfig;
use crate::net::history_sync::HISTORY_FAILED_MESSAGE;
use crate::net::types::Coordinate;
use crate::state::auth::AuthState;
use crate::state::history::{HistoryEntry, HistoryState};
use crate::state::map_script::MapScriptStatus;
use crate::state::prediction::PredictionState;
use crate::state::query::QueryForm;
use crate::state::tool::ToolState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::today;

pub const MAP_KEY_FAILED_MESSAGE: &str = "Could not load the map key.";

#[cfg(feature = "hydrate")]
async fn load_map(tool: RwSignal<ToolState>, script: RwSignal<MapScriptStatus>, config: ClientConfig) {
    if !tool.try_update(ToolState::begin_loading).unwrap_or(false) {
        return;
    }
    let key = match crate::net::api::fetch_maps_key(&config).await {
        Ok(key) => key,
        Err(e) => {
            log::warn!("maps key fetch failed: {e}");
            tool.try_update(|t| t.fail(e.user_message(MAP_KEY_FAILED_MESSAGE)));
            return;
        }
    };
    tool.try_update(ToolState::key_loaded);
    match crate::util::maps::ensure_script(script, &key.0).await {
        Ok(()) => tool.try_update(ToolState::script_loaded),
        Err(message) => tool.try_update(|t| t.fail(message)),
    };
}

#[cfg(feature = "hydrate")]
async fn record_entry(
    config: ClientConfig,
    auth: RwSignal<AuthState>,
    history: RwSignal<HistoryState>,
    entry: HistoryEntry,
) {
    use crate::net::history_sync::{prepend_limit, record_history};
    use crate::util::storage::BrowserStorage;

    let limit = prepend_limit(&config);
    history.try_update(|h| h.prepend(entry.clone(), limit));
    let Some(member_id) = auth.get_untracked().user.map(|u| u.member_id) else {
        return;
    };
    let entries = history.try_with_untracked(|h| h.entries.clone()).unwrap_or_default();
    if let Err(e) = record_history(&config, &BrowserStorage, &member_id, &entry, &entries).await {
        log::warn!("history save failed: {e}");
    }
}

#[component]
pub fn ToolsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let script = expect_context::<RwSignal<MapScriptStatus>>();
    install_unauth_redirect(auth, use_navigate());

    let tool = RwSignal::new(ToolState::default());
    let form = RwSignal::new(QueryForm::default());
    let prediction = RwSignal::new(PredictionState::default());
    let history = RwSignal::new(HistoryState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_map(tool, script, config.clone()));
    #[cfg(not(feature = "hydrate"))]
    let _ = script;

    let history_config = config.clone();
    let history_requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if history_requested.get_untracked() {
            return;
        }
        history_requested.set(true);
        history.update(HistoryState::begin_load);

        #[cfg(feature = "hydrate")]
        {
            let config = history_config.clone();
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
            let _ = (user, &history_config);
            history.update(|h| h.fail(HISTORY_FAILED_MESSAGE.to_owned()));
        }
    });

    let on_select = Callback::new(move |coordinate: Coordinate| {
        if tool.try_update(|t| t.select(coordinate)).unwrap_or(false) {
            form.update(|f| f.set_coordinate(coordinate));
        }
    });

    let on_submit = Callback::new(move |()| {
        if !tool.get_untracked().is_ready() {
            return;
        }
        let snapshot = form.get_untracked();
        tool.update(|t| {
            t.follow_form(&snapshot);
        });
        let date = snapshot.history_date(&today());
        let Some(Ok(pending)) = prediction.try_update(|p| p.begin(&snapshot, date)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::predict_tsunami(&config, &pending.request).await;
                if let Err(e) = &outcome {
                    log::warn!("prediction failed: {e}");
                }
                if let Some(Some(entry)) = prediction.try_update(|p| p.complete(pending.id, outcome)) {
                    record_entry(config, auth, history, entry).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (pending, &config);
    });

    on_cleanup(move || {
        prediction.try_update_untracked(PredictionState::cancel);
    });

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="tools-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="tools-page">
                <Header/>
                <div class="tools-page__info">
                    <h1 class="tools-page__title">"Map"</h1>
                    <button
                        class="tools-page__history-toggle"
                        on:click=move |_| tool.update(|t| t.history_open = !t.history_open)
                    >
                        "History"
                    </button>
                    <EarthquakeAlert/>
                </div>
                <div class="tools-page__body">
                    <QueryPanel form=form tool=tool prediction=prediction on_submit=on_submit/>
                    <MapView tool=tool on_select=on_select/>
                    <RealtimeFeed/>
                </div>
                <CoordinatePanel tool=tool/>
                <Show when=move || tool.get().history_open>
                    <HistoryPanel history=history/>
                </Show>
            </div>
        </Show>
    }
}
