use super::*;

#[test]
fn card_header_combines_title_and_status_label() {
    assert_eq!(
        card_header("Onboarding notes", ArtifactStatus::Published),
        "Onboarding notes (PUBLISHED)"
    );
    assert_eq!(
        card_header("WIP", ArtifactStatus::ChangesRequested),
        "WIP (CHANGES_REQUESTED)"
    );
}
