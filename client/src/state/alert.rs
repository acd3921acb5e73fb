//! Simulated East Sea earthquake alert.
//!
//! DESIGN
//! ======
//! Opening the modal draws a random quake and starts a prediction for it.
//! Each opening gets a fresh `RequestId`; a completion for an older opening,
//! or one arriving after close, is dropped.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use crate::net::error::ApiError;
use crate::net::types::{PredictionRequest, PredictionResponse};
use crate::state::prediction::RequestId;
use crate::util::format::format_probability;

pub const ALERT_FAILED_MESSAGE: &str = "Prediction failed";

const MAGNITUDE_RANGE: (f64, f64) = (5.0, 9.0);
const DEPTH_RANGE_KM: (u32, u32) = (10, 500);
const LATITUDE_RANGE: (f64, f64) = (35.0, 40.0);
const LONGITUDE_RANGE: (f64, f64) = (128.0, 132.0);

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn uniform(sample: f64, (lo, hi): (f64, f64)) -> f64 {
    lo + sample.clamp(0.0, 1.0) * (hi - lo)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedQuake {
    pub magnitude: f64,
    pub depth: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl SimulatedQuake {
    /// Build a quake from a `[0, 1)` sampler, drawing magnitude, depth,
    /// latitude, then longitude.
    pub fn generate(mut sample: impl FnMut() -> f64) -> Self {
        // Rounding can push the top of the range up to the bound, so cap just under it.
        let magnitude = round_to(uniform(sample(), MAGNITUDE_RANGE), 1).min(MAGNITUDE_RANGE.1 - 0.1);
        let span = f64::from(DEPTH_RANGE_KM.1 - DEPTH_RANGE_KM.0 + 1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let offset = (sample().clamp(0.0, 1.0) * span).floor() as u32;
        let depth = (DEPTH_RANGE_KM.0 + offset).min(DEPTH_RANGE_KM.1);
        let latitude = round_to(uniform(sample(), LATITUDE_RANGE), 4).min(LATITUDE_RANGE.1 - 0.0001);
        let longitude = round_to(uniform(sample(), LONGITUDE_RANGE), 4).min(LONGITUDE_RANGE.1 - 0.0001);
        Self { magnitude, depth, latitude, longitude }
    }

    pub fn request(&self) -> PredictionRequest {
        PredictionRequest {
            latitude: self.latitude,
            longitude: self.longitude,
            magnitude: self.magnitude,
            depth: f64::from(self.depth),
        }
    }
}

/// Banded reading of a tsunami probability percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbabilityLevel {
    VeryLow,
    Low,
    High,
    VeryHigh,
}

impl ProbabilityLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 30.0 {
            Self::VeryLow
        } else if percentage <= 50.0 {
            Self::Low
        } else if percentage <= 80.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very low",
            Self::Low => "Low",
            Self::High => "High",
            Self::VeryHigh => "Very high",
        }
    }

    /// CSS modifier for the level badge.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AlertReading {
    Pending,
    Ready { probability: String, level: ProbabilityLevel },
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertState {
    next_id: u64,
    active: Option<RequestId>,
    pub quake: Option<SimulatedQuake>,
    pub reading: Option<AlertReading>,
}

impl AlertState {
    pub fn is_open(&self) -> bool {
        self.quake.is_some()
    }

    /// Open the modal for `quake` and return the id its prediction must carry.
    pub fn open(&mut self, quake: SimulatedQuake) -> RequestId {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.active = Some(id);
        self.quake = Some(quake);
        self.reading = Some(AlertReading::Pending);
        id
    }

    /// Apply a prediction outcome. Returns `false` if `id` is stale.
    pub fn complete(&mut self, id: RequestId, outcome: Result<PredictionResponse, ApiError>) -> bool {
        if self.active != Some(id) {
            return false;
        }
        self.active = None;
        self.reading = Some(match outcome {
            Ok(resp) => AlertReading::Ready {
                probability: format_probability(resp.tsunami_probability),
                level: ProbabilityLevel::from_percentage(resp.tsunami_probability),
            },
            Err(e) => {
                leptos::logging::warn!("alert prediction failed: {e}");
                AlertReading::Failed(ALERT_FAILED_MESSAGE.to_owned())
            }
        });
        true
    }

    pub fn close(&mut self) {
        self.active = None;
        self.quake = None;
        self.reading = None;
    }
}
