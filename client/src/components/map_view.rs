//! Map widget host with map/satellite tabs and a status overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tool page drives loading and owns `ToolState`. Once the phase reaches
//! `Ready`, this component mounts the SDK map into its container, mirrors
//! `selected` into the single marker, and mirrors `tab` into the map type.
//! Clicks are reported through `on_select`; the page decides whether they
//! count. Map handles are released on unmount.

use leptos::prelude::*;

use crate::net::types::Coordinate;
use crate::state::tool::{MapTab, ToolState, status_overlay};

/// Initial view over the East Sea.
pub const DEFAULT_CENTER: Coordinate = Coordinate { latitude: 37.5, longitude: 130.0 };

#[component]
pub fn MapView(tool: RwSignal<ToolState>, on_select: Callback<Coordinate>) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let mounted = RwSignal::new(false);
        Effect::new(move || {
            if mounted.get_untracked() || !tool.get().is_ready() {
                return;
            }
            let Some(container) = container_ref.get() else {
                return;
            };
            match crate::util::maps::mount_map(&container, DEFAULT_CENTER, on_select) {
                Ok(()) => mounted.set(true),
                Err(message) => {
                    log::warn!("map mount failed: {message}");
                    tool.update(|t| t.phase = crate::state::tool::ToolPhase::Error(message));
                }
            }
        });

        Effect::new(move || {
            let selected = tool.get().selected;
            if !mounted.get() {
                return;
            }
            if let Some(coordinate) = selected {
                crate::util::maps::set_marker(coordinate);
            }
        });

        Effect::new(move || {
            let tab = tool.get().tab;
            if mounted.get() {
                crate::util::maps::set_map_type(tab);
            }
        });

        on_cleanup(crate::util::maps::unmount);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = on_select;

    let tab_button = move |tab: MapTab| {
        view! {
            <button
                class="map-view__tab"
                class:map-view__tab--active=move || tool.get().tab == tab
                on:click=move |_| tool.update(|t| t.tab = tab)
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="map-view">
            <div class="map-view__tabs">{tab_button(MapTab::Map)} {tab_button(MapTab::Satellite)}</div>
            <div class="map-view__canvas" node_ref=container_ref></div>
            {move || {
                status_overlay(&tool.get().phase)
                    .map(|(text, is_error)| {
                        view! {
                            <div class="map-view__overlay" class:map-view__overlay--error=is_error>
                                {text}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
