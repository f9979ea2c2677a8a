use super::*;

fn sample_artifact_json() -> &'static str {
    r#"{
        "id": "a-1",
        "title": "Onboarding notes",
        "summary": "How we onboard",
        "content": "Long form text",
        "status": "PUBLISHED",
        "file_url": "http://files.example/a-1.pdf",
        "created_by": "u-1",
        "created_on": "2025-01-02T03:04:05"
    }"#
}

#[test]
fn status_labels_round_trip() {
    for status in ArtifactStatus::all() {
        let parsed: ArtifactStatus = status.as_label().parse().expect("label should parse");
        assert_eq!(parsed, status);
    }
}

#[test]
fn status_rejects_unknown_label() {
    let err = "ARCHIVED".parse::<ArtifactStatus>().expect_err("should reject");
    assert_eq!(err.kind, "status");
    assert_eq!(err.value, "ARCHIVED");
}

#[test]
fn status_default_is_draft() {
    assert_eq!(ArtifactStatus::default(), ArtifactStatus::Draft);
}

#[test]
fn status_serializes_as_screaming_snake_case() {
    let json = serde_json::to_string(&ArtifactStatus::ChangesRequested).expect("serialize");
    assert_eq!(json, "\"CHANGES_REQUESTED\"");
}

#[test]
fn region_labels_round_trip() {
    for region in Region::all() {
        let parsed: Region = region.as_label().parse().expect("label should parse");
        assert_eq!(parsed, region);
    }
}

#[test]
fn region_rejects_unknown_label() {
    let err = "ANTARCTICA".parse::<Region>().expect_err("should reject");
    assert_eq!(err.kind, "region");
}

#[test]
fn artifact_deserializes_full_record() {
    let artifact: Artifact = serde_json::from_str(sample_artifact_json()).expect("deserialize");
    assert_eq!(artifact.id, "a-1");
    assert_eq!(artifact.status, ArtifactStatus::Published);
    assert_eq!(artifact.file_url.as_deref(), Some("http://files.example/a-1.pdf"));
}

#[test]
fn artifact_tolerates_missing_optional_fields() {
    let artifact: Artifact = serde_json::from_str(
        r#"{"id": "a-2", "title": "t", "summary": "s", "content": "c"}"#,
    )
    .expect("deserialize");
    assert_eq!(artifact.status, ArtifactStatus::Draft);
    assert_eq!(artifact.file_url, None);
    assert_eq!(artifact.created_by, None);
}

#[test]
fn session_deserializes_token_response() {
    let session: Session = serde_json::from_str(
        r#"{"access_token": "at", "refresh_token": "rt", "token_type": "bearer"}"#,
    )
    .expect("deserialize");
    assert_eq!(session.access_token, "at");
    assert_eq!(session.token_type, "bearer");
}

#[test]
fn api_error_body_deserializes_with_and_without_status_code() {
    let with: ApiErrorBody =
        serde_json::from_str(r#"{"error": "Artifact not found", "status_code": 404}"#)
            .expect("deserialize");
    assert_eq!(with.error, "Artifact not found");
    assert_eq!(with.status_code, Some(404));

    let without: ApiErrorBody =
        serde_json::from_str(r#"{"error": "boom"}"#).expect("deserialize");
    assert_eq!(without.status_code, None);
}
