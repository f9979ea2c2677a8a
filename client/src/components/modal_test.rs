use super::*;

#[test]
fn escape_closes_an_open_dialog() {
    assert!(close_on_global_key(true, "Escape"));
}

#[test]
fn escape_is_ignored_while_closed() {
    assert!(!close_on_global_key(false, "Escape"));
}

#[test]
fn other_keys_do_not_close() {
    assert!(!close_on_global_key(true, "Enter"));
    assert!(!close_on_global_key(true, "Tab"));
    assert!(!close_on_global_key(true, "e"));
}
