use super::*;

fn sample_session() -> Session {
    Session {
        access_token: "at-1".to_owned(),
        refresh_token: "rt-1".to_owned(),
        token_type: "bearer".to_owned(),
    }
}

#[test]
fn encode_decode_round_trips() {
    let session = sample_session();
    let raw = encode_session(&session);
    assert_eq!(decode_session(&raw), Some(session));
}

#[test]
fn decode_rejects_corrupt_input() {
    assert_eq!(decode_session("not json"), None);
    assert_eq!(decode_session(""), None);
    assert_eq!(decode_session(r#"{"access_token": "at"}"#), None);
}

#[test]
fn load_outside_browser_is_signed_out() {
    assert_eq!(load(), None);
}
