//! Wire DTOs for the prediction backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde round-trips stay
//! lossless; Rust-side names stay snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated member as returned by `GET /member/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub member_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Profile {
    /// Name shown in the navigation bar, falling back to the member id.
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.member_id)
    }
}

/// Login credentials posted to `/generateToken`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub member_id: String,
    pub password: String,
}

/// Registration payload posted to `/member/join`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub member_id: String,
    pub user_name: String,
    pub password: String,
}

/// Bearer token pair issued on login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Body of `POST /predict/tsunami`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude: f64,
    pub depth: f64,
}

/// Response of `POST /predict/tsunami`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    /// Probability as a percentage in `[0, 100]`.
    pub tsunami_probability: f64,
    #[serde(default)]
    pub is_steep_slope: Option<bool>,
}

/// One entry of the `GET /earthquake/realtime` feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealtimeQuake {
    #[serde(default)]
    pub time: Option<String>,
    pub magnitude: f64,
    pub depth: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub place: Option<String>,
}

/// Map-provider key from `GET /config/google-key`.
///
/// The backend has answered with both `{"key": "..."}` and a bare JSON string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapsKey(pub String);

impl<'de> Deserialize<'de> for MapsKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(String),
            Wrapped {
                #[serde(alias = "apiKey", alias = "googleKey")]
                key: String,
            },
        }

        let key = match Raw::deserialize(deserializer)? {
            Raw::Bare(key) | Raw::Wrapped { key } => key,
        };
        if key.trim().is_empty() {
            return Err(D::Error::custom("empty maps key"));
        }
        Ok(Self(key))
    }
}

/// Error body shape the backend uses for failures.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
