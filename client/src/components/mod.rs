//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and the tool-page panels. Page-owned
//! state arrives as `RwSignal` props; session and config come from context.

pub mod coordinate_panel;
pub mod earthquake_modal;
pub mod header;
pub mod history_panel;
pub mod map_view;
pub mod query_panel;
pub mod realtime_feed;
pub mod user_nav;
