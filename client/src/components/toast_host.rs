//! Global notification area rendering the toast queue.
//!
//! Toasts auto-dismiss after a few seconds in the browser; the dismiss
//! button always works, so native renders stay usable without timers.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[cfg(feature = "csr")]
const AUTO_DISMISS_SECS: u64 = 4;

/// Fixed-position host for the shared toast queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().entries().to_vec()
                key=|toast| toast.id
                let:toast
            >
                <ToastEntry toast toasts />
            </For>
        </div>
    }
}

#[component]
fn ToastEntry(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(AUTO_DISMISS_SECS)).await;
            toasts.update(|t| t.dismiss(id));
        });
    }

    let class = format!("toast toast--{}", toast.level.as_class());
    view! {
        <div class=class role="status">
            <span class="toast__message">{toast.message.clone()}</span>
            <button
                class="toast__dismiss"
                aria-label="Dismiss notification"
                on:click=move |_| toasts.update(|t| t.dismiss(id))
            >
                "✕"
            </button>
        </div>
    }
}
