//! Networking modules for the prediction backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `session` and `history_sync` sequence those calls
//! against client state, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod history_sync;
pub mod session;
pub mod types;
