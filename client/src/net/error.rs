//! Normalized error type for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper collapses transport, status, and decode failures into
//! `ApiError`. Pages turn it into display text with `user_message`, passing
//! the fallback they want shown when the backend gave no message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 401 from the backend.
    #[error("not authenticated")]
    Unauthorized,

    /// Any other non-success status, with the server-provided message if present.
    #[error("backend error: status {status}")]
    Backend { status: u16, message: Option<String> },

    /// A success response whose body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build the error for a non-success status from the raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Backend { status, message }
    }

    /// Text to show the user, preferring the backend's own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Backend { message: Some(message), .. } => message.clone(),
            Self::Unauthorized => SESSION_EXPIRED_MESSAGE.to_owned(),
            _ => fallback.to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
