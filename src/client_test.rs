use super::*;
use crate::experiments::{Experiment, ExperimentSet};

fn header<'a>(headers: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
}

// =============================================================================
// build_headers — cookie path
// =============================================================================

#[test]
fn cookie_path_authorization_header_exact() {
    let creds = BootstrapCredentials::Cookie("abc123".into());
    let headers = build_headers(&creds, "US", "testkey").unwrap();
    assert_eq!(
        header(&headers, "Authorization"),
        Some("X-WPCALYPSO 82330f34b92c1adaae66648d5bb64da4")
    );
}

#[test]
fn cookie_path_sets_all_four_headers() {
    let creds = BootstrapCredentials::Cookie("abc123".into());
    let headers = build_headers(&creds, "DE", "testkey").unwrap();
    assert_eq!(headers.len(), 4);
    assert_eq!(header(&headers, "X-Forwarded-GeoIP-Country-Code"), Some("DE"));
    assert_eq!(header(&headers, "Cookie"), Some("wordpress_logged_in=abc123"));
    assert_eq!(header(&headers, "User-Agent"), Some("WordPress.com Calypso"));
}

#[test]
fn cookie_path_signs_decoded_value() {
    // "abc%20123" decodes to "abc 123" before signing.
    let creds = BootstrapCredentials::from_parts(Some("abc%20123"), None).unwrap();
    let headers = build_headers(&creds, "US", "testkey").unwrap();
    assert_eq!(
        header(&headers, "Authorization"),
        Some("X-WPCALYPSO 03f52a58226a2927ea515280cc6d0868")
    );
    assert_eq!(header(&headers, "Cookie"), Some("wordpress_logged_in=abc 123"));
}

#[test]
fn cookie_path_empty_api_key_rejected() {
    let creds = BootstrapCredentials::Cookie("abc123".into());
    let result = build_headers(&creds, "US", "");
    assert!(matches!(result, Err(BootstrapError::InvalidApiKey)));
}

// =============================================================================
// build_headers — support-session path
// =============================================================================

#[test]
fn session_path_single_passthrough_header() {
    let creds = BootstrapCredentials::SupportSession("sess-42".into());
    let headers = build_headers(&creds, "US", "testkey").unwrap();
    assert_eq!(headers.len(), 1);
    assert_eq!(header(&headers, "x-support-session"), Some("sess-42"));
    assert_eq!(header(&headers, "Authorization"), None);
}

#[test]
fn session_path_ignores_api_key() {
    // The key is only consulted on the signed cookie path.
    let creds = BootstrapCredentials::SupportSession("sess-42".into());
    assert!(build_headers(&creds, "US", "").is_ok());
}

// =============================================================================
// map_response
// =============================================================================

#[test]
fn success_body_is_filtered() {
    let body = r#"{"ID":1,"display_name":"Jane","is_superuser":true}"#;
    let user = map_response(200, body).unwrap();
    assert_eq!(user.id, Some(1));
    assert_eq!(user.display_name.as_deref(), Some("Jane"));
    // Fields outside the allowlist never survive filtering.
    let serialized = serde_json::to_value(&user).unwrap();
    assert!(serialized.get("is_superuser").is_none());
}

#[test]
fn failure_body_fields_carried_into_error() {
    let body = r#"{"error":"forbidden","message":"no"}"#;
    match map_response(403, body).unwrap_err() {
        BootstrapError::RemoteApi { status, fields } => {
            assert_eq!(status, 403);
            assert_eq!(fields.get("error"), Some(&serde_json::json!("forbidden")));
            assert_eq!(fields.get("message"), Some(&serde_json::json!("no")));
        }
        other => panic!("expected RemoteApi, got {other:?}"),
    }
}

#[test]
fn failure_with_unparseable_body_keeps_status() {
    match map_response(502, "<html>bad gateway</html>").unwrap_err() {
        BootstrapError::RemoteApi { status, fields } => {
            assert_eq!(status, 502);
            assert!(fields.is_empty());
        }
        other => panic!("expected RemoteApi, got {other:?}"),
    }
}

#[test]
fn success_with_unparseable_body_is_parse_error() {
    let result = map_response(200, "not json");
    assert!(matches!(result, Err(BootstrapError::ResponseParse(_))));
}

// =============================================================================
// sign_cookie
// =============================================================================

#[test]
fn sign_cookie_known_vector() {
    let hex = sign_cookie("testkey", "abc123").unwrap();
    assert_eq!(hex, "82330f34b92c1adaae66648d5bb64da4");
}

#[test]
fn sign_cookie_depends_on_key() {
    let a = sign_cookie("key-a", "abc123").unwrap();
    let b = sign_cookie("key-b", "abc123").unwrap();
    assert_ne!(a, b);
}

// =============================================================================
// client construction and validation ordering
// =============================================================================

fn test_client() -> BootstrapClient {
    BootstrapClient::new(BootstrapConfig::new("testkey")).unwrap()
}

#[test]
fn url_fixed_at_construction() {
    let experiments = ExperimentSet::new(vec![
        Experiment::new("signupFlow", "20250818"),
        Experiment::new("readerSearch", "20250901"),
    ]);
    let config = BootstrapConfig::new("testkey").with_experiments(experiments);
    let client = BootstrapClient::new(config).unwrap();
    assert_eq!(
        client.url(),
        "https://public-api.wordpress.com/rest/v1/me?meta=flags&abtests=signupFlow_20250818,readerSearch_20250901"
    );
}

#[tokio::test]
async fn authenticate_conflicting_credentials_fails_before_network() {
    let client = test_client();
    let result = client
        .authenticate(Some("cookie"), "US", Some("sess-1"))
        .await;
    assert!(matches!(result, Err(BootstrapError::ConflictingCredentials)));
}

#[tokio::test]
async fn authenticate_missing_credentials_fails_before_network() {
    let client = test_client();
    let result = client.authenticate(None, "US", None).await;
    assert!(matches!(result, Err(BootstrapError::MissingCredentials)));
}

#[tokio::test]
async fn authenticate_cookie_with_empty_key_fails_before_network() {
    let client = BootstrapClient::new(BootstrapConfig::new("")).unwrap();
    let result = client.authenticate(Some("abc123"), "US", None).await;
    assert!(matches!(result, Err(BootstrapError::InvalidApiKey)));
}

#[tokio::test]
async fn authenticate_unroutable_host_is_transport_error() {
    // Port 1 on loopback refuses the connection; no response ever arrives.
    let mut config = BootstrapConfig::new("testkey");
    config.api_base = "http://127.0.0.1:1".to_string();
    let client = BootstrapClient::new(config).unwrap();
    let result = client.authenticate(Some("abc123"), "US", None).await;
    assert!(matches!(result, Err(BootstrapError::Transport(_))));
}
