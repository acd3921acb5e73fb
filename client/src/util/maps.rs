//! Google Maps interop for the tool page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The maps SDK is plain JavaScript reached through `js_sys::Reflect`. Map,
//! marker, and click-listener handles are not `Send`, so they live in a
//! thread-local slot owned by whichever `MapView` is mounted. `unmount`
//! releases the listener and marker and drops the slot.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a display string; the tool page moves to its
//! `Error` phase with it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use js_sys::{Array, Function, Object, Reflect};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::net::types::Coordinate;
use crate::state::map_script::{MapScriptStatus, ScriptAction, script_url};
use crate::state::tool::MapTab;

const READY_CALLBACK: &str = "__tsunamiMapsReady";
const WAIT_POLL: Duration = Duration::from_millis(50);
const DEFAULT_ZOOM: f64 = 7.0;

struct MapHandles {
    map: JsValue,
    marker: Option<JsValue>,
    listener: JsValue,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

thread_local! {
    static MAP: RefCell<Option<MapHandles>> = const { RefCell::new(None) };
}

fn js_err(context: &str, err: &JsValue) -> String {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    format!("{context}: {detail}")
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, String> {
    let value = Reflect::get(target, &JsValue::from_str(key)).map_err(|e| js_err(key, &e))?;
    if value.is_undefined() || value.is_null() {
        return Err(format!("{key} is not available"));
    }
    Ok(value)
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

fn maps_namespace() -> Result<JsValue, String> {
    let window = web_sys::window().ok_or("no window")?;
    let google = get(&window, "google")?;
    get(&google, "maps")
}

fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, String> {
    let method: Function = get(target, name)?.dyn_into().map_err(|e| js_err(name, &e))?;
    Reflect::apply(&method, target, args).map_err(|e| js_err(name, &e))
}

fn lat_lng_literal(coordinate: Coordinate) -> Object {
    let literal = Object::new();
    set(&literal, "lat", &JsValue::from_f64(coordinate.latitude));
    set(&literal, "lng", &JsValue::from_f64(coordinate.longitude));
    literal
}

// =============================================================================
// SCRIPT LOADING
// =============================================================================

/// Make sure the SDK is loaded, injecting the script at most once per page.
///
/// # Errors
///
/// Returns a message if the script fails to load or another caller's load failed.
pub async fn ensure_script(status: RwSignal<MapScriptStatus>, key: &str) -> Result<(), String> {
    if maps_namespace().is_ok() {
        status.set(MapScriptStatus::Loaded);
        return Ok(());
    }

    let action = status.try_update(MapScriptStatus::acquire).ok_or("map status disposed")?;
    match action {
        ScriptAction::Ready => Ok(()),
        ScriptAction::Wait => loop {
            gloo_timers::future::sleep(WAIT_POLL).await;
            match status.try_get_untracked() {
                Some(current) => {
                    if let Some(outcome) = current.settled() {
                        return outcome;
                    }
                }
                None => return Err("map status disposed".to_owned()),
            }
        },
        ScriptAction::Inject => {
            let outcome = inject_script(key).await;
            match &outcome {
                Ok(()) => status.set(MapScriptStatus::Loaded),
                Err(message) => {
                    log::warn!("maps script failed: {message}");
                    status.set(MapScriptStatus::Error(message.clone()));
                }
            }
            outcome
        }
    }
}

async fn inject_script(key: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let head = document.head().ok_or("no document head")?;

    let (tx, rx) = oneshot::channel::<Result<(), String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_ready = Rc::clone(&tx);
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx_ready.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });
    let tx_error = Rc::clone(&tx);
    let on_error = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx_error.borrow_mut().take() {
            let _ = tx.send(Err("Google Maps script could not be loaded".to_owned()));
        }
    });

    Reflect::set(&window, &JsValue::from_str(READY_CALLBACK), on_ready.as_ref())
        .map_err(|e| js_err("register callback", &e))?;

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| js_err("create script", &e))?
        .unchecked_into();
    script.set_src(&script_url(key, READY_CALLBACK));
    script.set_async(true);
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    head.append_child(&script).map_err(|e| js_err("append script", &e))?;

    let outcome = rx.await.unwrap_or_else(|_| Err("maps loader dropped".to_owned()));

    script.set_onerror(None);
    let _ = Reflect::delete_property(&window, &JsValue::from_str(READY_CALLBACK));
    drop(on_ready);
    drop(on_error);
    outcome
}

// =============================================================================
// MAP HANDLES
// =============================================================================

/// Create the map inside `container` and report clicks through `on_click`.
///
/// # Errors
///
/// Returns a message if the SDK is missing or the map cannot be constructed.
pub fn mount_map(container: &web_sys::HtmlElement, center: Coordinate, on_click: Callback<Coordinate>) -> Result<(), String> {
    unmount();
    let maps = maps_namespace()?;

    let options = Object::new();
    set(&options, "center", &lat_lng_literal(center));
    set(&options, "zoom", &JsValue::from_f64(DEFAULT_ZOOM));
    set(&options, "mapTypeId", &JsValue::from_str(MapTab::Map.map_type_id()));
    set(&options, "streetViewControl", &JsValue::FALSE);
    set(&options, "mapTypeControl", &JsValue::FALSE);

    let ctor: Function = get(&maps, "Map")?.dyn_into().map_err(|e| js_err("Map", &e))?;
    let map = Reflect::construct(&ctor, &Array::of2(container, &options)).map_err(|e| js_err("new Map", &e))?;

    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        match click_coordinate(&event) {
            Ok(coordinate) => on_click.run(coordinate),
            Err(message) => log::warn!("map click ignored: {message}"),
        }
    });
    let listener = call_method(
        &map,
        "addListener",
        &Array::of2(&JsValue::from_str("click"), handler.as_ref()),
    )?;

    MAP.with(|slot| {
        *slot.borrow_mut() = Some(MapHandles { map, marker: None, listener, _on_click: handler });
    });
    Ok(())
}

fn click_coordinate(event: &JsValue) -> Result<Coordinate, String> {
    let lat_lng = get(event, "latLng")?;
    let latitude = call_method(&lat_lng, "lat", &Array::new())?.as_f64().ok_or("lat is not a number")?;
    let longitude = call_method(&lat_lng, "lng", &Array::new())?.as_f64().ok_or("lng is not a number")?;
    Ok(Coordinate::new(latitude, longitude))
}

/// Move the single marker to `coordinate`, creating it on first use.
pub fn set_marker(coordinate: Coordinate) {
    let result = MAP.with(|slot| -> Result<(), String> {
        let mut slot = slot.borrow_mut();
        let Some(handles) = slot.as_mut() else {
            return Ok(());
        };
        let position = lat_lng_literal(coordinate);
        if let Some(marker) = &handles.marker {
            call_method(marker, "setPosition", &Array::of1(&position))?;
        } else {
            let options = Object::new();
            set(&options, "position", &position);
            set(&options, "map", &handles.map);
            let ctor: Function = get(&maps_namespace()?, "Marker")?
                .dyn_into()
                .map_err(|e| js_err("Marker", &e))?;
            let marker = Reflect::construct(&ctor, &Array::of1(&options)).map_err(|e| js_err("new Marker", &e))?;
            handles.marker = Some(marker);
        }
        call_method(&handles.map, "panTo", &Array::of1(&position)).map(|_| ())
    });
    if let Err(message) = result {
        log::warn!("marker update failed: {message}");
    }
}

pub fn set_map_type(tab: MapTab) {
    MAP.with(|slot| {
        if let Some(handles) = slot.borrow().as_ref() {
            let args = Array::of1(&JsValue::from_str(tab.map_type_id()));
            if let Err(message) = call_method(&handles.map, "setMapTypeId", &args) {
                log::warn!("map type switch failed: {message}");
            }
        }
    });
}

/// Release the click listener and marker of the mounted map, if any.
pub fn unmount() {
    let Some(handles) = MAP.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    if let Some(marker) = &handles.marker {
        let _ = call_method(marker, "setMap", &Array::of1(&JsValue::NULL));
    }
    if let Ok(event) = maps_namespace().and_then(|maps| get(&maps, "event")) {
        let _ = call_method(&event, "removeListener", &Array::of1(&handles.listener));
    }
}
