//! Custom query form: date range, magnitude, depth, and location.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tool page owns the `QueryForm` and `PredictionState` signals; this
//! panel edits the form and raises `on_submit`. Range clamping lives in
//! `QueryForm`, so the inputs may hold any text.

use leptos::prelude::*;

use crate::state::prediction::PredictionState;
use crate::state::query::{DEPTH_MAX_KM, DEPTH_MIN_KM, MAGNITUDE_MAX, MAGNITUDE_MIN, QueryForm};
use crate::state::tool::ToolState;

/// Move the marker to a committed manual location edit.
fn follow_typed_location(form: RwSignal<QueryForm>, tool: RwSignal<ToolState>) {
    let snapshot = form.get_untracked();
    tool.update(|t| {
        t.follow_form(&snapshot);
    });
}

#[component]
pub fn QueryPanel(
    form: RwSignal<QueryForm>,
    tool: RwSignal<ToolState>,
    prediction: RwSignal<PredictionState>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let busy = move || prediction.get().is_loading();
    let disabled = move || busy() || !tool.get().is_ready();

    view! {
        <form
            class="query-panel"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="query-panel__header">
                <h3>"Custom Query"</h3>
            </div>

            <div class="query-panel__field">
                <label>"Date"</label>
                <div class="query-panel__date-range">
                    <input
                        type="date"
                        prop:value=move || form.get().start_date
                        on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                    />
                    <span>"-"</span>
                    <input
                        type="date"
                        prop:value=move || form.get().end_date
                        on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="query-panel__field">
                <label>"Magnitude"</label>
                <div class="query-panel__slider">
                    <input
                        type="range"
                        min=MAGNITUDE_MIN.to_string()
                        max=MAGNITUDE_MAX.to_string()
                        step="0.1"
                        prop:value=move || form.get().magnitude.to_string()
                        on:input=move |ev| form.update(|f| f.set_magnitude_text(&event_target_value(&ev)))
                    />
                    <input
                        type="number"
                        step="0.1"
                        prop:value=move || format!("{:.1}", form.get().magnitude)
                        on:change=move |ev| form.update(|f| f.set_magnitude_text(&event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="query-panel__field">
                <label>"Depth (km)"</label>
                <div class="query-panel__slider">
                    <input
                        type="range"
                        min=DEPTH_MIN_KM.to_string()
                        max=DEPTH_MAX_KM.to_string()
                        step="1"
                        prop:value=move || form.get().depth.to_string()
                        on:input=move |ev| form.update(|f| f.set_depth_text(&event_target_value(&ev)))
                    />
                    <input
                        type="number"
                        step="1"
                        prop:value=move || format!("{:.1}", form.get().depth)
                        on:change=move |ev| form.update(|f| f.set_depth_text(&event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="query-panel__field">
                <label>"Location"</label>
                <div class="query-panel__location">
                    <span>"Lat"</span>
                    <input
                        type="text"
                        placeholder="Lat"
                        prop:value=move || form.get().latitude
                        on:input=move |ev| form.update(|f| f.latitude = event_target_value(&ev))
                        on:change=move |_| follow_typed_location(form, tool)
                    />
                    <span>"Lon"</span>
                    <input
                        type="text"
                        placeholder="Lon"
                        prop:value=move || form.get().longitude
                        on:input=move |ev| form.update(|f| f.longitude = event_target_value(&ev))
                        on:change=move |_| follow_typed_location(form, tool)
                    />
                </div>
            </div>

            <button class="query-panel__submit" type="submit" disabled=disabled>
                {move || if busy() { "Predicting..." } else { "Get Events" }}
            </button>

            {move || {
                prediction
                    .get()
                    .result
                    .map(|outcome| {
                        view! {
                            <div class="query-panel__message query-panel__message--success">
                                <p>{format!("Tsunami probability: {}", outcome.probability)}</p>
                                {outcome
                                    .steep_slope
                                    .then(|| {
                                        view! {
                                            <p class="query-panel__note">"Steep seabed slope near this location."</p>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
            {move || {
                prediction
                    .get()
                    .error
                    .map(|error| view! { <p class="query-panel__message query-panel__message--error">{error}</p> })
            }}
        </form>
    }
}
