use super::*;
use crate::net::types::Coordinate;
use crate::state::history::HistoryState;
use crate::state::tool::{ToolPhase, ToolState, status_overlay};

fn located_form() -> QueryForm {
    let mut form = QueryForm::default();
    form.set_coordinate(Coordinate::new(37.0, 135.0));
    form
}

fn response(probability: f64) -> PredictionResponse {
    PredictionResponse { tsunami_probability: probability, is_steep_slope: None }
}

#[test]
fn submit_without_location_produces_no_request() {
    let mut state = PredictionState::default();
    let err = state.begin(&QueryForm::default(), "2025-01-01".to_owned()).unwrap_err();
    assert_eq!(err, SubmitError::Location(LocationError::Missing));
    assert!(!state.is_loading());
    assert_eq!(state.error.as_deref(), Some("Select a location on the map first."));
}

#[test]
fn begin_builds_request_from_form() {
    let mut state = PredictionState::default();
    let mut form = located_form();
    form.set_magnitude(7.1);
    form.set_depth(33.0);
    let pending = state.begin(&form, "2025-01-01".to_owned()).unwrap();
    assert_eq!(
        pending.request,
        PredictionRequest { latitude: 37.0, longitude: 135.0, magnitude: 7.1, depth: 33.0 }
    );
    assert!(state.is_loading());
}

#[test]
fn second_submit_while_in_flight_is_busy() {
    let mut state = PredictionState::default();
    state.begin(&located_form(), String::new()).unwrap();
    assert_eq!(state.begin(&located_form(), String::new()), Err(SubmitError::Busy));
}

#[test]
fn success_formats_probability_and_returns_history_entry() {
    let mut state = PredictionState::default();
    let pending = state.begin(&located_form(), "2025-02-03".to_owned()).unwrap();
    let entry = state.complete(pending.id, Ok(response(42.567))).unwrap();
    assert_eq!(state.result.as_ref().map(|r| r.probability.as_str()), Some("42.57%"));
    assert_eq!(entry.prediction_result, "42.57%");
    assert_eq!(entry.date, "2025-02-03");
    assert!(!state.is_loading());
}

#[test]
fn steep_slope_flag_is_kept() {
    let mut state = PredictionState::default();
    let pending = state.begin(&located_form(), String::new()).unwrap();
    state.complete(
        pending.id,
        Ok(PredictionResponse { tsunami_probability: 10.0, is_steep_slope: Some(true) }),
    );
    assert!(state.result.as_ref().is_some_and(|r| r.steep_slope));
}

#[test]
fn failure_clears_previous_result_and_stores_message() {
    let mut state = PredictionState::default();
    let first = state.begin(&located_form(), String::new()).unwrap();
    state.complete(first.id, Ok(response(50.0)));

    let second = state.begin(&located_form(), String::new()).unwrap();
    let entry = state.complete(second.id, Err(ApiError::Backend { status: 500, message: None }));
    assert!(entry.is_none());
    assert!(state.result.is_none());
    assert_eq!(state.error.as_deref(), Some(PREDICTION_FAILED_MESSAGE));
}

#[test]
fn failure_prefers_server_message() {
    let mut state = PredictionState::default();
    let pending = state.begin(&located_form(), String::new()).unwrap();
    state.complete(
        pending.id,
        Err(ApiError::Backend { status: 422, message: Some("model unavailable".to_owned()) }),
    );
    assert_eq!(state.error.as_deref(), Some("model unavailable"));
}

#[test]
fn stale_completion_is_ignored() {
    let mut state = PredictionState::default();
    let first = state.begin(&located_form(), String::new()).unwrap();
    state.cancel();
    let second = state.begin(&located_form(), String::new()).unwrap();
    assert_ne!(first.id, second.id);

    assert!(state.complete(first.id, Ok(response(99.0))).is_none());
    assert!(state.result.is_none());
    assert!(state.is_loading());

    state.complete(second.id, Ok(response(12.0)));
    assert_eq!(state.result.as_ref().map(|r| r.probability.as_str()), Some("12.00%"));
}

#[test]
fn completion_after_cancel_is_dropped() {
    let mut state = PredictionState::default();
    let pending = state.begin(&located_form(), String::new()).unwrap();
    state.cancel();
    assert!(state.complete(pending.id, Ok(response(30.0))).is_none());
    assert!(state.result.is_none());
}

#[test]
fn tool_page_scenario_from_load_to_history() {
    let mut tool = ToolState::default();
    let mut form = QueryForm::default();
    let mut prediction = PredictionState::default();
    let mut history = HistoryState::default();

    let mut phases = Vec::new();
    tool.begin_loading();
    phases.push(tool.phase.clone());
    tool.key_loaded();
    phases.push(tool.phase.clone());
    tool.script_loaded();
    phases.push(tool.phase.clone());
    assert_eq!(phases, [ToolPhase::LoadingKey, ToolPhase::LoadingScript, ToolPhase::Ready]);
    assert_eq!(status_overlay(&tool.phase), None);

    let click = Coordinate::new(37.0, 135.0);
    assert!(tool.select(click));
    form.set_coordinate(click);
    assert_eq!(form.latitude, "37.0000");
    assert_eq!(form.longitude, "135.0000");

    form.set_magnitude(12.0);
    assert!((form.magnitude - 9.5).abs() < f64::EPSILON);

    let pending = prediction.begin(&form, "2025-05-05".to_owned()).unwrap();
    assert_eq!(
        pending.request,
        PredictionRequest { latitude: 37.0, longitude: 135.0, magnitude: 9.5, depth: form.depth }
    );

    let entry = prediction.complete(pending.id, Ok(response(73.2))).unwrap();
    assert_eq!(prediction.result.as_ref().map(|r| r.probability.as_str()), Some("73.20%"));

    history.prepend(entry, Some(10));
    assert_eq!(history.entries[0].prediction_result, "73.20%");
    assert!((history.entries[0].magnitude - 9.5).abs() < f64::EPSILON);
}
