//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navbar to coordinate login redirects and
//! identity-dependent rendering. Created on login, cleared on logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::{Session, User};

/// Authentication state tracking the stored session, resolved identity,
/// and whether the initial profile fetch is still in flight.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Install a freshly issued session; identity resolves separately.
    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Record the identity fetched for the current session.
    pub fn resolve_user(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop session and identity, e.g. on logout or a rejected token.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.user = None;
        self.loading = false;
    }

    /// Bearer access token for authenticated API calls.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    /// Whether a signed-in identity is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
