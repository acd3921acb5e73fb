use super::*;

#[test]
fn from_values_defaults_when_empty() {
    let cfg = ClientConfig::from_values(&BuildValues::default()).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.stale_token_policy, StaleTokenPolicy::Keep);
    assert_eq!(cfg.history_store, HistoryStore::Remote);
    assert_eq!(cfg.history_limit, 10);
    assert_eq!(cfg.realtime_refresh_ms, 1000);
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ClientConfig::from_values(&BuildValues {
        api_base: Some("https://quake.example/api/"),
        stale_token_policy: Some("Clear"),
        history_store: Some(" local "),
        history_limit: Some("25"),
        realtime_refresh_ms: Some("5000"),
    })
    .unwrap();
    assert_eq!(cfg.api_base, "https://quake.example/api");
    assert_eq!(cfg.stale_token_policy, StaleTokenPolicy::Clear);
    assert_eq!(cfg.history_store, HistoryStore::Local);
    assert_eq!(cfg.history_limit, 25);
    assert_eq!(cfg.realtime_refresh_ms, 5000);
}

#[test]
fn from_values_rejects_unknown_policy() {
    let err = ClientConfig::from_values(&BuildValues { stale_token_policy: Some("forget"), ..BuildValues::default() })
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownValue { key: "TSUNAMI_STALE_TOKEN_POLICY", value: "forget".to_owned() }
    );
}

#[test]
fn from_values_rejects_bad_number() {
    let err =
        ClientConfig::from_values(&BuildValues { history_limit: Some("ten"), ..BuildValues::default() }).unwrap_err();
    assert!(err.to_string().contains("TSUNAMI_HISTORY_LIMIT"));
}

#[test]
fn blank_api_base_falls_back_to_default() {
    let cfg = ClientConfig::from_values(&BuildValues { api_base: Some("  "), ..BuildValues::default() }).unwrap();
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn endpoint_joins_without_double_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("/member/me"), "/api/member/me");
    assert_eq!(cfg.endpoint("history"), "/api/history");
}
