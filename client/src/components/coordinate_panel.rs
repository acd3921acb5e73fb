//! Side panel showing the selected map position at full precision.

use leptos::prelude::*;

use crate::net::types::Coordinate;
use crate::state::tool::ToolState;
use crate::util::format::format_coordinate_detail;

#[component]
pub fn CoordinatePanel(tool: RwSignal<ToolState>) -> impl IntoView {
    let selected = move || tool.get().selected;
    let row = |label: &'static str, value: f64| {
        view! {
            <p class="coordinate-panel__row">
                <strong>{label}</strong>
                " "
                {format_coordinate_detail(value)}
            </p>
        }
    };

    view! {
        <Show when=move || tool.get().coordinate_panel_open>
            <aside class="coordinate-panel">
                <div class="coordinate-panel__header">
                    <h2>"Selected location"</h2>
                    <button
                        class="coordinate-panel__close"
                        aria-label="Close"
                        on:click=move |_| tool.update(|t| t.coordinate_panel_open = false)
                    >
                        "×"
                    </button>
                </div>
                {move || match selected() {
                    Some(Coordinate { latitude, longitude }) => {
                        view! {
                            <div>
                                {row("Latitude:", latitude)}
                                {row("Longitude:", longitude)}
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <p class="coordinate-panel__hint">"Click the map to choose a location."</p> }
                            .into_any()
                    }
                }}
            </aside>
        </Show>
    }
}
