use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_public_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_timeout, Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));
}

#[test]
fn overrides_and_trailing_slash_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8081"),
        ("BACKEND_URL", "http://backend:8080/"),
        ("BACKEND_PUBLIC_URL", "https://api.example.com/"),
        ("BACKEND_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.backend_url, "http://backend:8080");
    assert_eq!(cfg.backend_public_url, "https://api.example.com");
    assert_eq!(cfg.backend_timeout, Duration::from_secs(5));
}

#[test]
fn public_url_follows_backend_url() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "http://backend:9000")])).unwrap();
    assert_eq!(cfg.backend_public_url, "http://backend:9000");
}

#[test]
fn blank_values_take_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BACKEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn relative_backend_url_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "backend:8080")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUrl { key: "BACKEND_URL", value: "backend:8080".to_owned() });
}
