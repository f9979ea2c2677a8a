use super::*;
use crate::state::toast::{ToastLevel, ToastState};

#[test]
fn success_toast_stays_queued_across_an_in_app_route_change() {
    let mut toasts = ToastState::default();
    toasts.push(ToastLevel::Success, "Artifact updated.");
    assert_eq!(toasts.entries().len(), 1);
    assert_eq!(toasts.entries()[0].message, "Artifact updated.");
}

#[test]
fn route_artifact_id_trims_and_accepts_value() {
    assert_eq!(route_artifact_id(Some(" a-42 ".to_owned())), Some("a-42".to_owned()));
}

#[test]
fn route_artifact_id_rejects_missing_or_blank_param() {
    assert_eq!(route_artifact_id(None), None);
    assert_eq!(route_artifact_id(Some(String::new())), None);
    assert_eq!(route_artifact_id(Some("   ".to_owned())), None);
}
