//! Random earthquake alert: draws a quake and shows its tsunami reading.

use leptos::prelude::*;

use crate::state::alert::{AlertReading, AlertState, SimulatedQuake};

fn random_unit() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.5
    }
}

/// Trigger button plus the modal it opens.
#[component]
pub fn EarthquakeAlert() -> impl IntoView {
    let alert = RwSignal::new(AlertState::default());
    #[cfg(feature = "hydrate")]
    let config = expect_context::<crate::config::ClientConfig>();

    let on_open = move |_| {
        let quake = SimulatedQuake::generate(random_unit);
        let Some(id) = alert.try_update(|a| a.open(quake)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::predict_tsunami(&config, &quake.request()).await;
                alert.try_update(|a| a.complete(id, outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <button class="alert-trigger" on:click=on_open>"Random Earthquake"</button>
        <Show when=move || alert.get().is_open()>
            <div class="dialog-backdrop" on:click=move |_| alert.update(AlertState::close)>
                <div class="dialog dialog--alert" on:click=move |ev| ev.stop_propagation()>
                    <h2 class="dialog__title">"Earthquake Alert"</h2>
                    {move || {
                        alert
                            .get()
                            .quake
                            .map(|q| {
                                view! {
                                    <dl class="alert-details">
                                        <dt>"Magnitude"</dt>
                                        <dd>{format!("{:.1}", q.magnitude)}</dd>
                                        <dt>"Depth"</dt>
                                        <dd>{format!("{} km", q.depth)}</dd>
                                        <dt>"Latitude"</dt>
                                        <dd>{format!("{:.4}", q.latitude)}</dd>
                                        <dt>"Longitude"</dt>
                                        <dd>{format!("{:.4}", q.longitude)}</dd>
                                    </dl>
                                }
                            })
                    }}
                    {move || match alert.get().reading {
                        Some(AlertReading::Pending) | None => {
                            view! { <p class="alert-reading">"Predicting..."</p> }.into_any()
                        }
                        Some(AlertReading::Ready { probability, level }) => {
                            view! {
                                <p class="alert-reading">
                                    {format!("Tsunami probability: {probability} ")}
                                    <span class=format!("alert-level alert-level--{}", level.css_modifier())>
                                        {level.label()}
                                    </span>
                                </p>
                            }
                                .into_any()
                        }
                        Some(AlertReading::Failed(message)) => {
                            view! { <p class="alert-reading alert-reading--error">{message}</p> }.into_any()
                        }
                    }}
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| alert.update(AlertState::close)>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
