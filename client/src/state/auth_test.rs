use super::*;

fn sample_session() -> Session {
    Session {
        access_token: "at-1".to_owned(),
        refresh_token: "rt-1".to_owned(),
        token_type: "bearer".to_owned(),
    }
}

fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Dana".to_owned(),
        email: "dana@example.com".to_owned(),
        region: records::Region::Europe,
    }
}

#[test]
fn sign_in_stores_session_without_identity() {
    let mut auth = AuthState::default();
    auth.sign_in(sample_session());
    assert_eq!(auth.token(), Some("at-1"));
    assert!(!auth.is_authenticated());
}

#[test]
fn resolve_user_marks_authenticated_and_clears_loading() {
    let mut auth = AuthState {
        loading: true,
        ..AuthState::default()
    };
    auth.sign_in(sample_session());
    auth.resolve_user(sample_user());
    assert!(auth.is_authenticated());
    assert!(!auth.loading);
}

#[test]
fn sign_out_clears_session_and_identity() {
    let mut auth = AuthState::default();
    auth.sign_in(sample_session());
    auth.resolve_user(sample_user());
    auth.sign_out();
    assert_eq!(auth.token(), None);
    assert!(!auth.is_authenticated());
    assert!(!auth.loading);
}
