//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation, the maps
//! SDK) from page and component logic.

pub mod auth;
pub mod format;
#[cfg(feature = "hydrate")]
pub mod maps;
pub mod storage;
