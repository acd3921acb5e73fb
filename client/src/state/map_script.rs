//! Load status of the Google Maps script.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<MapScriptStatus>`. The first tool page to ask
//! for the script moves it to `Loading` and injects the `<script>` tag; any
//! other mount that sees `Loading` waits on the signal instead of injecting a
//! second copy.

#[cfg(test)]
#[path = "map_script_test.rs"]
mod map_script_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapScriptStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Error(String),
}

/// What a caller should do when it needs the script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptAction {
    /// This caller owns the load and must inject the tag.
    Inject,
    /// Another caller is loading; wait for the status to settle.
    Wait,
    Ready,
}

impl MapScriptStatus {
    /// Decide the caller's action and claim the load when nobody else has.
    ///
    /// A previous `Error` is retried by the next caller.
    pub fn acquire(&mut self) -> ScriptAction {
        match self {
            Self::NotLoaded | Self::Error(_) => {
                *self = Self::Loading;
                ScriptAction::Inject
            }
            Self::Loading => ScriptAction::Wait,
            Self::Loaded => ScriptAction::Ready,
        }
    }

    /// Outcome seen by a waiter, or `None` while still loading.
    pub fn settled(&self) -> Option<Result<(), String>> {
        match self {
            Self::Loaded => Some(Ok(())),
            Self::Error(message) => Some(Err(message.clone())),
            Self::NotLoaded | Self::Loading => None,
        }
    }
}

/// Script URL for `key`, registering `callback` as the global ready hook.
pub fn script_url(key: &str, callback: &str) -> String {
    let encoded: String = key
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => char::from(b).to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("https://maps.googleapis.com/maps/api/js?key={encoded}&callback={callback}&loading=async")
}
