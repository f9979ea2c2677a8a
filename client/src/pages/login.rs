//! Login page: email + password against `POST /api/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Validate credentials input, returning trimmed email plus password.
pub(crate) fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login form. On success stores the session, resolves the profile, and
/// navigates home; a rejection surfaces as a toast and the form stays.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    message.set(msg.to_owned());
                    return;
                }
            };
        message.set(String::new());
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(session) => {
                    crate::util::session::store(&session);
                    let token = session.access_token.clone();
                    auth.update(|a| a.sign_in(session));
                    if let Some(user) = crate::net::api::fetch_profile(&token).await {
                        auth.update(|a| a.resolve_user(user));
                    }
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    crate::state::toast::push_error(toasts, e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, auth, toasts);
            busy.set(false);
        }
    };

    view! {
        <section class="form-page">
            <h1 class="page-title">"Login"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-form__message">{move || message.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign In"
                </button>
            </form>
        </section>
    }
}
