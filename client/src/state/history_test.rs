use super::*;
use crate::util::storage::MemoryStorage;

fn entry(n: u32) -> HistoryEntry {
    HistoryEntry {
        date: format!("2024-01-{:02}", n % 28 + 1),
        magnitude: 6.0,
        depth: 10.0,
        latitude: 37.0,
        longitude: f64::from(n),
        prediction_result: format!("{n}.00%"),
    }
}

#[test]
fn prepend_keeps_newest_first() {
    let mut state = HistoryState::default();
    state.prepend(entry(1), None);
    state.prepend(entry(2), None);
    state.prepend(entry(3), None);
    let results: Vec<_> = state.entries.iter().map(|e| e.prediction_result.as_str()).collect();
    assert_eq!(results, ["3.00%", "2.00%", "1.00%"]);
}

#[test]
fn prepend_with_limit_truncates_to_most_recent() {
    let mut state = HistoryState::default();
    for n in 1..=12 {
        state.prepend(entry(n), Some(10));
    }
    assert_eq!(state.entries.len(), 10);
    assert_eq!(state.entries[0].prediction_result, "12.00%");
    assert_eq!(state.entries[9].prediction_result, "3.00%");
}

#[test]
fn replace_clears_loading_and_error() {
    let mut state = HistoryState { loading: true, error: Some("x".to_owned()), ..HistoryState::default() };
    state.replace(vec![entry(1)]);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn prepend_after_failed_load_clears_error() {
    let mut state = HistoryState::default();
    state.begin_load();
    state.fail("Could not load history.".to_owned());
    state.prepend(entry(4), None);
    assert!(state.error.is_none());
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn late_load_keeps_entries_added_while_loading() {
    let mut state = HistoryState::default();
    state.begin_load();
    state.prepend(entry(9), None);
    state.replace(vec![entry(2), entry(1)]);
    let results: Vec<_> = state.entries.iter().map(|e| e.prediction_result.as_str()).collect();
    assert_eq!(results, ["9.00%", "2.00%", "1.00%"]);
    assert!(!state.loading);
}

#[test]
fn reload_after_settled_load_replaces_list() {
    let mut state = HistoryState::default();
    state.begin_load();
    state.replace(vec![entry(1)]);
    state.prepend(entry(5), None);

    state.begin_load();
    state.replace(vec![entry(5), entry(1)]);
    assert_eq!(state.entries, vec![entry(5), entry(1)]);
}

#[test]
fn local_round_trip_is_capped_and_per_member() {
    let store = MemoryStorage::default();
    let entries: Vec<_> = (1..=11).rev().map(entry).collect();
    save_local(&store, "kim01", &entries, 10);

    let loaded = load_local(&store, "kim01", 10);
    assert_eq!(loaded.len(), 10);
    assert_eq!(loaded[0].prediction_result, "11.00%");
    assert!(load_local(&store, "lee02", 10).is_empty());
    assert!(store.contains("tsunamiHistory:kim01"));
}

#[test]
fn load_local_truncates_oversized_stored_list() {
    let store = MemoryStorage::default();
    let entries: Vec<_> = (1..=15).rev().map(entry).collect();
    save_local(&store, "kim01", &entries, 15);
    assert_eq!(load_local(&store, "kim01", 10).len(), 10);
}

#[test]
fn entry_serializes_camel_case() {
    let json = serde_json::to_value(entry(1)).unwrap();
    assert!(json.get("predictionResult").is_some());
    assert!(json.get("prediction_result").is_none());
}
