use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Info, "one");
    let second = state.push(ToastLevel::Error, "two");
    assert!(second > first);
    assert_eq!(state.entries().len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_entry() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Info, "one");
    let second = state.push(ToastLevel::Error, "two");
    state.dismiss(first);
    assert_eq!(state.entries().len(), 1);
    assert_eq!(state.entries()[0].id, second);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Success, "kept");
    state.dismiss(999);
    assert_eq!(state.entries().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Info, "one");
    state.dismiss(first);
    let second = state.push(ToastLevel::Info, "two");
    assert!(second > first);
}

#[test]
fn level_class_suffixes_are_stable() {
    assert_eq!(ToastLevel::Info.as_class(), "info");
    assert_eq!(ToastLevel::Success.as_class(), "success");
    assert_eq!(ToastLevel::Error.as_class(), "error");
}
