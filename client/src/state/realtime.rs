//! Realtime earthquake feed shown beside the map.

#[cfg(test)]
#[path = "realtime_test.rs"]
mod realtime_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::RealtimeQuake;

pub const REALTIME_FAILED_MESSAGE: &str = "Could not load realtime earthquakes.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RealtimeState {
    pub quakes: Vec<RealtimeQuake>,
    pub error: Option<String>,
}

impl RealtimeState {
    /// Apply one poll result. A failed poll keeps the last good list.
    pub fn apply(&mut self, outcome: Result<Vec<RealtimeQuake>, ApiError>) {
        match outcome {
            Ok(quakes) => {
                self.quakes = quakes;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message(REALTIME_FAILED_MESSAGE)),
        }
    }
}

/// One-line label for a feed row.
pub fn quake_label(quake: &RealtimeQuake) -> String {
    let place = quake.place.as_deref().unwrap_or("Unknown location");
    format!("M{:.1} {place} ({:.0} km)", quake.magnitude, quake.depth)
}

/// Drive the feed: fetch at once, then again after each `sleep`, until
/// `alive` turns false. A fetch that resolves after teardown is discarded.
pub async fn poll_feed<F, FFut, S, SFut>(
    mut fetch: F,
    mut sleep: S,
    alive: impl Fn() -> bool,
    mut apply: impl FnMut(Result<Vec<RealtimeQuake>, ApiError>),
) where
    F: FnMut() -> FFut,
    FFut: Future<Output = Result<Vec<RealtimeQuake>, ApiError>>,
    S: FnMut() -> SFut,
    SFut: Future<Output = ()>,
{
    while alive() {
        let outcome = fetch().await;
        if !alive() {
            break;
        }
        apply(outcome);
        sleep().await;
    }
}
