use super::*;
use records::{Session, User};

fn signed_in_state() -> AuthState {
    AuthState {
        session: Some(Session {
            access_token: "tok".to_owned(),
            refresh_token: "ref".to_owned(),
            token_type: "bearer".to_owned(),
        }),
        user: Some(User {
            id: "u-1".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            region: records::Region::default(),
        }),
        loading: false,
    }
}

#[test]
fn holds_while_the_profile_fetch_is_pending() {
    let state = AuthState {
        loading: true,
        ..AuthState::default()
    };
    assert!(!should_redirect(&state));
}

#[test]
fn redirects_once_settled_without_a_user() {
    assert!(should_redirect(&AuthState::default()));
}

#[test]
fn signed_in_users_stay_put() {
    assert!(!should_redirect(&signed_in_state()));
}

#[test]
fn session_without_resolved_identity_still_redirects_after_settling() {
    let mut state = signed_in_state();
    state.user = None;
    assert!(should_redirect(&state));
}
