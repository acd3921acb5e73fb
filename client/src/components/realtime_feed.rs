//! Live earthquake list, fetched on mount and refreshed on a fixed interval.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ClientConfig;
use crate::state::realtime::{RealtimeState, quake_label};

#[component]
pub fn RealtimeFeed() -> impl IntoView {
    let feed = RwSignal::new(RealtimeState::default());

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<ClientConfig>();
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let interval = std::time::Duration::from_millis(config.realtime_refresh_ms);
        leptos::task::spawn_local(async move {
            crate::state::realtime::poll_feed(
                || crate::net::api::fetch_realtime(&config),
                || gloo_timers::future::sleep(interval),
                || poll_alive_task.load(std::sync::atomic::Ordering::Relaxed),
                |outcome| {
                    if let Err(e) = &outcome {
                        log::warn!("realtime poll failed: {e}");
                    }
                    feed.update(|f| f.apply(outcome));
                },
            )
            .await;
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="realtime-feed">
            <h3 class="realtime-feed__title">"Realtime Earthquakes"</h3>
            {move || feed.get().error.map(|e| view! { <p class="realtime-feed__error">{e}</p> })}
            <Show
                when=move || !feed.get().quakes.is_empty()
                fallback=|| view! { <p class="realtime-feed__empty">"No recent earthquakes."</p> }
            >
                <ul class="realtime-feed__list">
                    {move || {
                        feed.get()
                            .quakes
                            .into_iter()
                            .map(|quake| {
                                let time = quake.time.clone().unwrap_or_default();
                                view! {
                                    <li class="realtime-feed__item">
                                        <span class="realtime-feed__label">{quake_label(&quake)}</span>
                                        <span class="realtime-feed__time">{time}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
