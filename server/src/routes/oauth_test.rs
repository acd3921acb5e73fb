use super::*;
use crate::routes::api_routes;
use crate::state::test_helpers::{spawn, state_for};

#[test]
fn known_providers_map_to_backend_authorization() {
    assert_eq!(
        oauth_redirect_target("https://api.example.com/", "google").as_deref(),
        Some("https://api.example.com/oauth2/authorization/google")
    );
    assert_eq!(
        oauth_redirect_target("https://api.example.com", "kakao").as_deref(),
        Some("https://api.example.com/oauth2/authorization/kakao")
    );
}

#[test]
fn unknown_provider_has_no_target() {
    assert_eq!(oauth_redirect_target("https://api.example.com", "github"), None);
    assert_eq!(oauth_redirect_target("https://api.example.com", "Google"), None);
}

#[tokio::test]
async fn authorize_redirects_browser_to_backend() {
    let base = spawn(api_routes(state_for("https://api.example.com"))).await;
    let client = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build().unwrap();

    let res = client.get(format!("{base}/oauth2/authorization/kakao")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers().get(reqwest::header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://api.example.com/oauth2/authorization/kakao")
    );

    let res = client.get(format!("{base}/oauth2/authorization/github")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
