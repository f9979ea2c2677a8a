//! Registration page: account creation against `POST /api/register`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::{Region, RegisterPayload};

use crate::state::toast::ToastState;

/// Validate registration input, returning a ready-to-send payload.
pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    region: Region,
) -> Result<RegisterPayload, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Name, email, and password are required.");
    }
    Ok(RegisterPayload {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        region,
    })
}

/// Registration form. On success navigates to `/login`; a rejection (e.g.
/// duplicate email) surfaces as a toast and the form stays.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let region = RwSignal::new(Region::default());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_register_input(
            &name.get(),
            &email.get(),
            &password.get(),
            region.get(),
        ) {
            Ok(payload) => payload,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        message.set(String::new());
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&payload).await {
                Ok(()) => {
                    crate::state::toast::push_success(
                        toasts,
                        "Account created. Sign in to continue.",
                    );
                    registered.set(true);
                }
                Err(e) => {
                    crate::state::toast::push_error(toasts, e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, toasts, registered);
            busy.set(false);
        }
    };

    view! {
        <section class="form-page">
            <h1 class="page-title">"Register"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Name"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                <label class="auth-form__label">
                    "Region"
                    <select
                        class="auth-form__select"
                        prop:value=move || region.get().as_label().to_owned()
                        on:change=move |ev| {
                            region.set(event_target_value(&ev).parse().unwrap_or_default());
                        }
                    >
                        {Region::all()
                            .into_iter()
                            .map(|r| view! { <option value=r.as_label()>{r.as_label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-form__message">{move || message.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create Account"
                </button>
            </form>
        </section>
    }
}
