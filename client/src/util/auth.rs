//! Route guarding for pages that require a signed-in user.
//!
//! DESIGN
//! ======
//! Guarded pages call [`install_unauth_redirect`] once during setup. The
//! redirect waits for the initial profile fetch to settle so a restored
//! session is not bounced to `/login` while its identity is still loading.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether the current auth state demands a bounce to the login page.
fn should_redirect(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Send unauthenticated visitors to `/login` once auth has settled.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect(&auth.read()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
