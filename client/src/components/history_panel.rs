//! Past prediction queries, newest first.

use leptos::prelude::*;

use crate::state::history::{HistoryEntry, HistoryState};

fn history_item(index: usize, entry: HistoryEntry) -> impl IntoView {
    view! {
        <li class="history-panel__item">
            <p><strong>{format!("Query {}", index + 1)}</strong></p>
            <p><strong>"Date: "</strong>{entry.date}</p>
            <p><strong>"Magnitude: "</strong>{format!("{:.1}", entry.magnitude)}</p>
            <p><strong>"Depth: "</strong>{format!("{:.1} km", entry.depth)}</p>
            <p><strong>"Latitude: "</strong>{format!("{:.4}", entry.latitude)}</p>
            <p><strong>"Longitude: "</strong>{format!("{:.4}", entry.longitude)}</p>
            <p><strong>"Prediction: "</strong>{entry.prediction_result}</p>
        </li>
    }
}

#[component]
pub fn HistoryPanel(history: RwSignal<HistoryState>) -> impl IntoView {
    view! {
        <section class="history-panel">
            <h3 class="history-panel__title">"History"</h3>
            {move || {
                let state = history.get();
                if state.loading && state.entries.is_empty() {
                    return view! { <p class="history-panel__status">"Loading history..."</p> }.into_any();
                }
                let banner = state
                    .error
                    .map(|error| view! { <p class="history-panel__status history-panel__status--error">{error}</p> });
                if state.entries.is_empty() {
                    if banner.is_some() {
                        return banner.into_any();
                    }
                    return view! {
                        <p class="history-panel__status">
                            "No history yet. Run a prediction to save the current query."
                        </p>
                    }
                        .into_any();
                }
                view! {
                    {banner}
                    <ol class="history-panel__list">
                        {state
                            .entries
                            .into_iter()
                            .enumerate()
                            .map(|(i, entry)| history_item(i, entry))
                            .collect_view()}
                    </ol>
                }
                    .into_any()
            }}
        </section>
    }
}
