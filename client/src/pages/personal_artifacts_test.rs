use records::ArtifactStatus;

use super::*;

fn artifact(id: &str) -> Artifact {
    Artifact {
        id: id.to_owned(),
        title: format!("Artifact {id}"),
        summary: "s".to_owned(),
        content: "c".to_owned(),
        status: ArtifactStatus::Draft,
        file_url: None,
        created_by: None,
        created_on: None,
    }
}

#[test]
fn remove_artifact_drops_only_the_matching_record() {
    let mut items = vec![artifact("a-1"), artifact("a-2"), artifact("a-3")];
    remove_artifact(&mut items, "a-2");
    let ids: Vec<&str> = items.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a-1", "a-3"]);
}

#[test]
fn remove_artifact_with_unknown_id_is_a_no_op() {
    let mut items = vec![artifact("a-1")];
    remove_artifact(&mut items, "a-9");
    assert_eq!(items.len(), 1);
}
