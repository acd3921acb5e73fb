use std::cell::{Cell, RefCell};
use std::future::{Future, ready};
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;

fn poll_once<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future should complete on first poll"),
    }
}

fn quake(magnitude: f64, place: Option<&str>) -> RealtimeQuake {
    RealtimeQuake {
        time: Some("2025-03-01T10:00:00".to_owned()),
        magnitude,
        depth: 12.0,
        latitude: 37.5,
        longitude: 129.4,
        place: place.map(str::to_owned),
    }
}

#[test]
fn apply_success_replaces_list_and_clears_error() {
    let mut state = RealtimeState { quakes: vec![], error: Some("old".to_owned()) };
    state.apply(Ok(vec![quake(4.2, Some("Pohang"))]));
    assert_eq!(state.quakes.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn apply_failure_keeps_last_list() {
    let mut state = RealtimeState::default();
    state.apply(Ok(vec![quake(4.2, None)]));
    state.apply(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.quakes.len(), 1);
    assert_eq!(state.error.as_deref(), Some(REALTIME_FAILED_MESSAGE));
}

#[test]
fn label_falls_back_for_missing_place() {
    assert_eq!(quake_label(&quake(4.3, Some("Pohang"))), "M4.3 Pohang (12 km)");
    assert_eq!(quake_label(&quake(5.0, None)), "M5.0 Unknown location (12 km)");
}

#[test]
fn poll_feed_fetches_before_first_sleep() {
    let events = RefCell::new(Vec::new());
    let checks = Cell::new(0);
    let mut feed = RealtimeState::default();

    poll_once(poll_feed(
        || {
            events.borrow_mut().push("fetch");
            ready(Ok(vec![quake(5.1, Some("Ulsan"))]))
        },
        || {
            events.borrow_mut().push("sleep");
            ready(())
        },
        || {
            checks.set(checks.get() + 1);
            checks.get() <= 3
        },
        |outcome| {
            events.borrow_mut().push("apply");
            feed.apply(outcome);
        },
    ));

    assert_eq!(events.into_inner(), ["fetch", "apply", "sleep", "fetch"]);
    assert_eq!(feed.quakes.len(), 1);
}

#[test]
fn poll_feed_does_nothing_once_torn_down() {
    let fetched = Cell::new(false);
    poll_once(poll_feed(
        || {
            fetched.set(true);
            ready(Ok(Vec::new()))
        },
        || ready(()),
        || false,
        |_| panic!("no result should be applied"),
    ));
    assert!(!fetched.get());
}
