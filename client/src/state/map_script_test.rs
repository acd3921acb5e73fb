use super::*;

#[test]
fn first_caller_injects_and_later_callers_wait() {
    let mut status = MapScriptStatus::default();
    assert_eq!(status.acquire(), ScriptAction::Inject);
    assert_eq!(status, MapScriptStatus::Loading);
    assert_eq!(status.acquire(), ScriptAction::Wait);
    assert_eq!(status.acquire(), ScriptAction::Wait);
}

#[test]
fn loaded_script_is_reused() {
    let mut status = MapScriptStatus::Loaded;
    assert_eq!(status.acquire(), ScriptAction::Ready);
    assert_eq!(status, MapScriptStatus::Loaded);
}

#[test]
fn error_is_retried_once_by_next_caller() {
    let mut status = MapScriptStatus::Error("blocked".to_owned());
    assert_eq!(status.acquire(), ScriptAction::Inject);
    assert_eq!(status.acquire(), ScriptAction::Wait);
}

#[test]
fn settled_reports_terminal_states_only() {
    assert_eq!(MapScriptStatus::NotLoaded.settled(), None);
    assert_eq!(MapScriptStatus::Loading.settled(), None);
    assert_eq!(MapScriptStatus::Loaded.settled(), Some(Ok(())));
    assert_eq!(MapScriptStatus::Error("x".to_owned()).settled(), Some(Err("x".to_owned())));
}

#[test]
fn script_url_encodes_key() {
    assert_eq!(
        script_url("AIza 12/3", "__tsunamiMapsReady"),
        "https://maps.googleapis.com/maps/api/js?key=AIza%2012%2F3&callback=__tsunamiMapsReady&loading=async"
    );
}
