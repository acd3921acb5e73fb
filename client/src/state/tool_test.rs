use super::*;
use crate::state::query::QueryForm;

#[test]
fn walks_loading_phases_to_ready() {
    let mut tool = ToolState::default();
    assert_eq!(tool.phase, ToolPhase::Idle);
    assert!(tool.begin_loading());
    assert_eq!(tool.phase, ToolPhase::LoadingKey);
    assert!(tool.key_loaded());
    assert_eq!(tool.phase, ToolPhase::LoadingScript);
    assert!(tool.script_loaded());
    assert!(tool.is_ready());
}

#[test]
fn out_of_order_transitions_are_rejected() {
    let mut tool = ToolState::default();
    assert!(!tool.key_loaded());
    assert!(!tool.script_loaded());
    assert_eq!(tool.phase, ToolPhase::Idle);
    assert!(tool.begin_loading());
    assert!(!tool.begin_loading());
    assert!(!tool.script_loaded());
}

#[test]
fn error_reachable_from_either_loading_phase() {
    let mut key = ToolState::default();
    key.begin_loading();
    assert!(key.fail("key missing"));
    assert_eq!(key.phase, ToolPhase::Error("key missing".to_owned()));

    let mut script = ToolState::default();
    script.begin_loading();
    script.key_loaded();
    assert!(script.fail("script blocked"));
    assert_eq!(script.phase, ToolPhase::Error("script blocked".to_owned()));
}

#[test]
fn error_not_reachable_from_idle_or_ready() {
    let mut tool = ToolState::default();
    assert!(!tool.fail("x"));
    tool.begin_loading();
    tool.key_loaded();
    tool.script_loaded();
    assert!(!tool.fail("x"));
    assert!(tool.is_ready());
}

#[test]
fn select_only_when_ready() {
    let mut tool = ToolState::default();
    assert!(!tool.select(Coordinate::new(37.0, 135.0)));
    assert!(tool.selected.is_none());

    tool.begin_loading();
    tool.key_loaded();
    tool.script_loaded();
    assert!(tool.select(Coordinate::new(37.0, 135.0)));
    assert_eq!(tool.selected, Some(Coordinate::new(37.0, 135.0)));
    assert!(tool.coordinate_panel_open);

    tool.select(Coordinate::new(36.0, 130.0));
    assert_eq!(tool.selected, Some(Coordinate::new(36.0, 130.0)));
}

#[test]
fn overlay_messages_per_phase() {
    assert_eq!(status_overlay(&ToolPhase::Ready), None);
    assert_eq!(status_overlay(&ToolPhase::Idle), None);
    assert_eq!(status_overlay(&ToolPhase::LoadingKey), Some(("Loading API key...".to_owned(), false)));
    assert_eq!(status_overlay(&ToolPhase::LoadingScript), Some(("Loading map data...".to_owned(), false)));
    assert_eq!(
        status_overlay(&ToolPhase::Error("boom".to_owned())),
        Some(("Error: boom".to_owned(), true))
    );
}

#[test]
fn tab_map_type_ids() {
    assert_eq!(MapTab::Map.map_type_id(), "roadmap");
    assert_eq!(MapTab::Satellite.map_type_id(), "satellite");
}

fn ready_tool() -> ToolState {
    let mut tool = ToolState::default();
    tool.begin_loading();
    tool.key_loaded();
    tool.script_loaded();
    tool
}

#[test]
fn typed_location_moves_marker() {
    let mut tool = ready_tool();
    let mut form = QueryForm::default();
    let click = Coordinate::new(37.123_456, 135.654_321);
    tool.select(click);
    form.set_coordinate(click);

    assert!(!tool.follow_form(&form));
    assert_eq!(tool.selected, Some(click));

    form.latitude = "36.5".to_owned();
    assert!(tool.follow_form(&form));
    assert_eq!(tool.selected, Some(Coordinate::new(36.5, 135.6543)));
}

#[test]
fn unparseable_typed_location_keeps_marker() {
    let mut tool = ready_tool();
    let click = Coordinate::new(37.0, 135.0);
    tool.select(click);

    let mut form = QueryForm::default();
    form.set_coordinate(click);
    form.longitude = "east".to_owned();
    assert!(!tool.follow_form(&form));
    assert_eq!(tool.selected, Some(click));
}

#[test]
fn typed_location_ignored_until_ready() {
    let mut tool = ToolState::default();
    let mut form = QueryForm::default();
    form.set_coordinate(Coordinate::new(37.0, 135.0));
    assert!(!tool.follow_form(&form));
    assert!(tool.selected.is_none());
}
