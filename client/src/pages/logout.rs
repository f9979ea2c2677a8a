//! Logout page: clears the auth context and redirects to login.
//!
//! The backend issues stateless bearer tokens, so logging out is entirely
//! client-side: drop the in-memory session and the persisted copy.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        auth.update(AuthState::sign_out);
        crate::util::session::clear();
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <section class="form-page">
            <p class="page-note">"Signing out..."</p>
        </section>
    }
}
