//! Prediction request lifecycle for the tool page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tool page calls `begin` on submit, performs the HTTP call with the
//! returned request, then hands the outcome back to `complete` with the same
//! `RequestId`. Completions for any other id are dropped, so a response that
//! lands after teardown or after a newer request can never overwrite state.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use crate::net::error::ApiError;
use crate::net::types::{PredictionRequest, PredictionResponse};
use crate::state::history::HistoryEntry;
use crate::state::query::{LocationError, QueryForm};
use crate::util::format::format_probability;

pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction request failed.";

/// Monotonic identifier matching a completion to the request that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Why a submit produced no request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error("A prediction is already running.")]
    Busy,
}

/// A request that has been started and awaits its HTTP outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingPrediction {
    pub id: RequestId,
    pub request: PredictionRequest,
}

#[derive(Clone, Debug, PartialEq)]
struct InFlight {
    id: RequestId,
    request: PredictionRequest,
    date: String,
}

/// Last successful prediction, formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionOutcome {
    pub probability: String,
    pub steep_slope: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionState {
    next_id: u64,
    in_flight: Option<InFlight>,
    pub result: Option<PredictionOutcome>,
    pub error: Option<String>,
}

impl PredictionState {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a prediction from the current form.
    ///
    /// `date` is recorded with the history entry if the request succeeds.
    ///
    /// # Errors
    ///
    /// `Busy` while another request is in flight; `Location` when the form has
    /// no usable coordinate. Either way no request is produced, and a location
    /// failure is also stored in `error` for display.
    pub fn begin(&mut self, form: &QueryForm, date: String) -> Result<PendingPrediction, SubmitError> {
        if self.in_flight.is_some() {
            return Err(SubmitError::Busy);
        }
        let coordinate = match form.coordinate() {
            Ok(c) => c,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        self.next_id += 1;
        let id = RequestId(self.next_id);
        let request = PredictionRequest {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            magnitude: form.magnitude,
            depth: form.depth,
        };
        self.in_flight = Some(InFlight { id, request, date });
        self.error = None;
        Ok(PendingPrediction { id, request })
    }

    /// Apply the outcome of request `id`.
    ///
    /// Returns the history entry to persist on success. Stale ids are ignored.
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<PredictionResponse, ApiError>,
    ) -> Option<HistoryEntry> {
        let in_flight = self.in_flight.take_if(|f| f.id == id)?;

        match outcome {
            Ok(resp) => {
                let probability = format_probability(resp.tsunami_probability);
                self.result = Some(PredictionOutcome {
                    probability: probability.clone(),
                    steep_slope: resp.is_steep_slope.unwrap_or(false),
                });
                self.error = None;
                Some(HistoryEntry {
                    date: in_flight.date,
                    magnitude: in_flight.request.magnitude,
                    depth: in_flight.request.depth,
                    latitude: in_flight.request.latitude,
                    longitude: in_flight.request.longitude,
                    prediction_result: probability,
                })
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.user_message(PREDICTION_FAILED_MESSAGE));
                None
            }
        }
    }

    /// Abandon the in-flight request; its completion will be ignored.
    pub fn cancel(&mut self) {
        self.in_flight = None;
    }
}
