use records::ArtifactStatus;

use super::*;

fn sample_artifact(file_url: Option<&str>) -> Artifact {
    Artifact {
        id: "a-42".to_owned(),
        title: "Title".to_owned(),
        summary: "Summary".to_owned(),
        content: "Content".to_owned(),
        status: ArtifactStatus::Draft,
        file_url: file_url.map(str::to_owned),
        created_by: None,
        created_on: None,
    }
}

#[test]
fn update_href_targets_the_artifact_id() {
    assert_eq!(update_href("a-42"), "/update-artifact/a-42");
}

#[test]
fn attachment_url_present_when_backend_sent_one() {
    let artifact = sample_artifact(Some("http://files.example/a.pdf"));
    assert_eq!(attachment_url(&artifact), Some("http://files.example/a.pdf"));
}

#[test]
fn attachment_url_absent_without_file() {
    let artifact = sample_artifact(None);
    assert_eq!(attachment_url(&artifact), None);
}

#[test]
fn attachment_url_treats_empty_string_as_absent() {
    let artifact = sample_artifact(Some(""));
    assert_eq!(attachment_url(&artifact), None);
}
