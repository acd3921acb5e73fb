//! Loading and recording query history against the configured store.

#[cfg(test)]
#[path = "history_sync_test.rs"]
mod history_sync_test;

use super::api;
use super::error::ApiError;
use crate::config::{ClientConfig, HistoryStore};
use crate::state::history::{HistoryEntry, load_local, save_local};
use crate::util::storage::KeyValueStore;

pub const HISTORY_FAILED_MESSAGE: &str = "Could not load history.";

/// Cap applied when prepending; the remote store keeps its own length.
pub fn prepend_limit(config: &ClientConfig) -> Option<usize> {
    match config.history_store {
        HistoryStore::Remote => None,
        HistoryStore::Local => Some(config.history_limit),
    }
}

/// Load `member_id`'s history, newest first.
///
/// # Errors
///
/// Only the remote store can fail.
pub async fn load_history(
    config: &ClientConfig,
    store: &impl KeyValueStore,
    member_id: &str,
) -> Result<Vec<HistoryEntry>, ApiError> {
    match config.history_store {
        HistoryStore::Remote => api::fetch_history(config).await,
        HistoryStore::Local => Ok(load_local(store, member_id, config.history_limit)),
    }
}

/// Persist a new entry. `entries` is the list after the entry was prepended.
///
/// # Errors
///
/// Only the remote store can fail.
pub async fn record_history(
    config: &ClientConfig,
    store: &impl KeyValueStore,
    member_id: &str,
    entry: &HistoryEntry,
    entries: &[HistoryEntry],
) -> Result<(), ApiError> {
    match config.history_store {
        HistoryStore::Remote => api::save_history(config, entry).await,
        HistoryStore::Local => {
            save_local(store, member_id, entries, config.history_limit);
            Ok(())
        }
    }
}
