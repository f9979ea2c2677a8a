use records::ArtifactStatus;

use super::*;

#[test]
fn artifact_endpoint_formats_expected_path() {
    assert_eq!(artifact_endpoint("a-42"), "/api/artifacts/a-42");
}

#[test]
fn bearer_value_prefixes_token() {
    assert_eq!(bearer_value("tok"), "Bearer tok");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
    assert_eq!(request_failed_message("artifact list", 500), "artifact list failed: 500");
}

#[test]
fn parse_api_json_decodes_expected_shape() {
    let session: Session = parse_api_json(
        "login",
        r#"{"access_token": "at", "refresh_token": "rt", "token_type": "bearer"}"#,
    )
    .expect("should decode");
    assert_eq!(session.access_token, "at");
}

#[test]
fn parse_api_json_surfaces_error_envelope() {
    let err = parse_api_json::<Session>(
        "login",
        r#"{"error": "Invalid credentials", "status_code": 401}"#,
    )
    .expect_err("should reject");
    assert_eq!(err, "Invalid credentials");
}

#[test]
fn parse_api_json_reports_garbage_bodies() {
    let err = parse_api_json::<Session>("login", "<html>oops</html>").expect_err("should reject");
    assert_eq!(err, "login: unexpected response");
}

#[test]
fn classify_artifact_response_decodes_record() {
    let body = r#"{"id": "a-42", "title": "t", "summary": "s", "content": "c", "status": "DRAFT"}"#;
    let artifact = classify_artifact_response(200, body)
        .expect("should succeed")
        .expect("should be present");
    assert_eq!(artifact.id, "a-42");
    assert_eq!(artifact.status, ArtifactStatus::Draft);
}

#[test]
fn classify_artifact_response_maps_http_404_to_none() {
    assert_eq!(classify_artifact_response(404, ""), Ok(None));
}

#[test]
fn classify_artifact_response_maps_envelope_404_to_none() {
    let body = r#"{"error": "Artifact not found", "status_code": 404}"#;
    assert_eq!(classify_artifact_response(200, body), Ok(None));
}

#[test]
fn classify_artifact_response_surfaces_other_envelope_errors() {
    let body = r#"{"error": "Unauthorized", "status_code": 403}"#;
    let err = classify_artifact_response(200, body).expect_err("should reject");
    assert_eq!(err, "Unauthorized");
}

#[test]
fn classify_artifact_response_reports_server_errors() {
    let err = classify_artifact_response(500, "").expect_err("should reject");
    assert_eq!(err, "artifact fetch failed: 500");
}
