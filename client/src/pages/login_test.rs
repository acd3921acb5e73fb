use super::*;

#[test]
fn provider_authorization_paths() {
    assert_eq!(OAuthProvider::Google.authorization_path(), "/oauth2/authorization/google");
    assert_eq!(OAuthProvider::Kakao.authorization_path(), "/oauth2/authorization/kakao");
}

#[test]
fn unauthorized_login_reads_as_bad_credentials() {
    assert_eq!(login_error_message(&ApiError::Unauthorized), LOGIN_FAILED_MESSAGE);
}

#[test]
fn backend_message_is_shown_when_present() {
    let err = ApiError::Backend { status: 400, message: Some("Member not found".to_owned()) };
    assert_eq!(login_error_message(&err), "Member not found");
}

#[test]
fn network_failure_uses_fallback() {
    assert_eq!(login_error_message(&ApiError::Network("offline".to_owned())), LOGIN_FAILED_MESSAGE);
}
