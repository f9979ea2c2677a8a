use super::*;
use axum::http::HeaderValue;

#[test]
fn relay_headers_keeps_repeated_set_cookie_values() {
    let mut headers = HeaderMap::new();
    headers.append("set-cookie", HeaderValue::from_static("access=a"));
    headers.append("set-cookie", HeaderValue::from_static("refresh=b"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    let relayed = relay_headers(&headers);
    assert_eq!(relayed.get_all("set-cookie").iter().count(), 2);
    assert_eq!(
        relayed.get("content-type"),
        Some(&HeaderValue::from_static("application/json"))
    );
}

#[test]
fn relay_headers_drops_hop_by_hop_entries() {
    let mut headers = HeaderMap::new();
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("host", HeaderValue::from_static("localhost:3000"));
    headers.insert("accept", HeaderValue::from_static("*/*"));
    let relayed = relay_headers(&headers);
    assert!(relayed.get("connection").is_none());
    assert!(relayed.get("host").is_none());
    assert!(relayed.get("accept").is_some());
}

#[test]
fn backend_target_joins_base_and_path() {
    assert_eq!(
        backend_target("http://127.0.0.1:8000", "/api/artifacts"),
        "http://127.0.0.1:8000/api/artifacts"
    );
}

#[test]
fn backend_target_tolerates_trailing_slash_on_base() {
    assert_eq!(
        backend_target("http://backend:8000/", "/api/login"),
        "http://backend:8000/api/login"
    );
}

#[test]
fn backend_target_preserves_query_strings() {
    assert_eq!(
        backend_target("http://backend:8000", "/api/artifacts?limit=5"),
        "http://backend:8000/api/artifacts?limit=5"
    );
}

#[test]
fn hop_headers_are_detected_case_insensitively() {
    assert!(is_hop_header("Connection"));
    assert!(is_hop_header("TRANSFER-ENCODING"));
    assert!(is_hop_header("host"));
}

#[test]
fn end_to_end_headers_are_forwarded() {
    assert!(!is_hop_header("authorization"));
    assert!(!is_hop_header("content-type"));
    assert!(!is_hop_header("accept"));
}
