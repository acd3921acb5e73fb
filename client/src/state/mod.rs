pub mod alert;
pub mod auth;
pub mod history;
pub mod map_script;
pub mod prediction;
pub mod query;
pub mod realtime;
pub mod tool;
