use crate::state::toast::{ToastLevel, ToastState};

#[test]
fn success_toast_stays_queued_across_an_in_app_route_change() {
    let mut toasts = ToastState::default();
    let id = toasts.push(ToastLevel::Success, "Artifact created.");
    // in-app navigation never rebuilds the queue, so the entry is still
    // live for the destination page to render
    assert_eq!(toasts.entries().len(), 1);
    assert_eq!(toasts.entries()[0].id, id);
    assert_eq!(toasts.entries()[0].message, "Artifact created.");
}
