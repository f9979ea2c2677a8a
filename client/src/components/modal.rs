//! Generic overlay modal container.
//!
//! DESIGN
//! ======
//! The parent owns the open flag; this component only renders children over
//! a backdrop while the flag is set and reports dismissals through
//! `on_close`. Escape is watched on the window, since focus stays wherever
//! the user left it when the dialog opens. Clicks inside the dialog stop
//! propagation so a dismissal fires exactly once, from the backdrop or the
//! Escape key.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::ev;
use leptos::prelude::*;

/// Whether a window-level key press dismisses the dialog.
fn close_on_global_key(open: bool, key: &str) -> bool {
    open && key == "Escape"
}

/// Overlay container rendered while `open` is set.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if close_on_global_key(open.get_untracked(), &ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
