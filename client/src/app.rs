//! Application shell: context providers, router, and global chrome.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the process-wide state (auth session, theme, toast queue),
//! provides it through context, and wires the named pages to their URL
//! paths. Pages never construct shared state themselves.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::create_artifact::CreateArtifactPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::logout::LogoutPage;
use crate::pages::personal_artifacts::PersonalArtifactsPage;
use crate::pages::register::RegisterPage;
use crate::pages::update_artifact::UpdateArtifactPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
#[cfg(feature = "csr")]
use crate::util::session;
use crate::util::theme;

/// Root component: providers, layout shell, and routes.
#[component]
pub fn App() -> impl IntoView {
    let auth = RwSignal::new(AuthState {
        loading: true,
        ..AuthState::default()
    });
    let theme = RwSignal::new(theme::load_preference());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(theme);
    provide_context(toasts);

    theme::apply(theme.get_untracked());

    // Restore a persisted session and resolve its identity; a rejected
    // token falls back to signed-out.
    #[cfg(feature = "csr")]
    {
        if let Some(stored) = session::load() {
            let token = stored.access_token.clone();
            auth.update(|a| a.sign_in(stored));
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile(&token).await {
                    Some(user) => auth.update(|a| a.resolve_user(user)),
                    None => {
                        session::clear();
                        auth.update(AuthState::sign_out);
                    }
                }
            });
        } else {
            auth.update(|a| a.loading = false);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        auth.update(|a| a.loading = false);
    }

    view! {
        <Router>
            <div class="app-shell">
                <Navbar />
                <main class="app-main">
                    <Routes fallback=|| {
                        view! {
                            <section class="not-found">
                                <h1 class="page-title">"Page not found"</h1>
                                <a class="btn" href="/">"Back to Home"</a>
                            </section>
                        }
                    }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/logout") view=LogoutPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/create-artifact") view=CreateArtifactPage />
                        <Route path=path!("/update-artifact/:id") view=UpdateArtifactPage />
                        <Route path=path!("/personal-artifacts") view=PersonalArtifactsPage />
                    </Routes>
                </main>
                <ToastHost />
            </div>
        </Router>
    }
}
