//! Query history for the signed-in member.
//!
//! DESIGN
//! ======
//! Entries are kept newest first. The remote variant mirrors whatever the
//! backend returns; the local variant lives in `localStorage` under a
//! per-member key and is capped to the most recent entries.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, load_json, save_json};

const LOCAL_HISTORY_PREFIX: &str = "tsunamiHistory:";

/// A saved prediction request and its formatted result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Query date (`YYYY-MM-DD`).
    pub date: String,
    pub magnitude: f64,
    pub depth: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Display form of the result, e.g. `"73.20%"`.
    pub prediction_result: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
    pub loading: bool,
    pub error: Option<String>,
    /// Entries prepended since the current load started. They are newer than
    /// anything the load can return.
    added_during_load: usize,
}

impl HistoryState {
    /// Mark the initial load as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
        self.added_during_load = 0;
    }

    /// Insert at the front, then drop anything past `limit` when one is given.
    /// A fresh entry supersedes an earlier load error.
    pub fn prepend(&mut self, entry: HistoryEntry, limit: Option<usize>) {
        self.entries.insert(0, entry);
        if self.loading {
            self.added_during_load += 1;
        }
        if let Some(limit) = limit {
            self.entries.truncate(limit);
            self.added_during_load = self.added_during_load.min(limit);
        }
        self.error = None;
    }

    /// Settle a load with the backend's list. Entries prepended while the
    /// load was in flight stay on top.
    pub fn replace(&mut self, entries: Vec<HistoryEntry>) {
        self.entries.truncate(self.added_during_load);
        self.entries.extend(entries);
        self.added_during_load = 0;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.added_during_load = 0;
        self.loading = false;
        self.error = Some(message);
    }
}

/// `localStorage` key holding a member's history list.
pub fn local_history_key(member_id: &str) -> String {
    format!("{LOCAL_HISTORY_PREFIX}{member_id}")
}

/// Load a member's local history, capped to `limit`.
pub fn load_local(store: &impl KeyValueStore, member_id: &str, limit: usize) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = load_json(store, &local_history_key(member_id)).unwrap_or_default();
    entries.truncate(limit);
    entries
}

/// Write a member's local history, capped to `limit`.
pub fn save_local(store: &impl KeyValueStore, member_id: &str, entries: &[HistoryEntry], limit: usize) {
    let capped = &entries[..entries.len().min(limit)];
    save_json(store, &local_history_key(member_id), &capped);
}
