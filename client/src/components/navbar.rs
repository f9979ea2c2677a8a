//! Top navigation bar: identity-dependent links plus the theme toggle.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::theme::{self, Theme};

/// Navigation links driven by auth state, and the light/dark toggle.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<Theme>>();

    let on_toggle = move |_| {
        theme.set(theme::toggle(theme.get_untracked()));
    };
    let toggle_label = move || match theme.get() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Artifact Keep"</a>
            <nav class="navbar__links">
                <a class="navbar__link" href="/">"Home"</a>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="navbar__link" href="/login">"Login"</a>
                            <a class="navbar__link" href="/register">"Register"</a>
                        }
                    }
                >
                    <a class="navbar__link" href="/create-artifact">"New Artifact"</a>
                    <a class="navbar__link" href="/personal-artifacts">"My Artifacts"</a>
                    <a class="navbar__link" href="/logout">"Logout"</a>
                </Show>
            </nav>
            <button class="navbar__theme-toggle" on:click=on_toggle>
                {toggle_label}
            </button>
        </header>
    }
}
