//! Shared create/update artifact form.
//!
//! DESIGN
//! ======
//! Both form pages render the same fields and apply the same required-field
//! validation; only the submit target differs, so the owning page passes a
//! callback and keeps the network call. Required-field failures never reach
//! the callback — the form shows a local message and no request is made.
//! The file input is exposed through a `NodeRef` because the selected file
//! lives on the DOM element, not in reactive state.

#[cfg(test)]
#[path = "artifact_form_test.rs"]
mod artifact_form_test;

use leptos::prelude::*;
use records::{Artifact, ArtifactDraft, ArtifactStatus};

/// Validate required fields, returning trimmed values.
pub(crate) fn validate_artifact_input(
    title: &str,
    summary: &str,
    content: &str,
) -> Result<(String, String, String), &'static str> {
    let title = title.trim();
    let summary = summary.trim();
    let content = content.trim();
    if title.is_empty() || summary.is_empty() || content.is_empty() {
        return Err("Title, summary, and content are required.");
    }
    Ok((title.to_owned(), summary.to_owned(), content.to_owned()))
}

/// Seed form fields from an existing artifact, or defaults for a new one.
pub(crate) fn initial_values(initial: Option<&Artifact>) -> ArtifactDraft {
    initial.map_or_else(ArtifactDraft::default, |artifact| ArtifactDraft {
        title: artifact.title.clone(),
        summary: artifact.summary.clone(),
        content: artifact.content.clone(),
        status: artifact.status,
    })
}

/// Artifact form fields with local required-field validation.
///
/// `on_submit` receives a validated draft; the optional file stays on the
/// element behind `file_input` for the caller to read at submit time.
#[component]
pub fn ArtifactForm(
    #[prop(optional, into)] initial: Option<Artifact>,
    submit_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    file_input: NodeRef<leptos::html::Input>,
    on_submit: Callback<ArtifactDraft>,
) -> impl IntoView {
    let seed = initial_values(initial.as_ref());
    let title = RwSignal::new(seed.title);
    let summary = RwSignal::new(seed.summary);
    let content = RwSignal::new(seed.content);
    let status = RwSignal::new(seed.status);
    let message = RwSignal::new(String::new());

    let on_submit_ev = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_artifact_input(&title.get(), &summary.get(), &content.get()) {
            Ok((title, summary, content)) => {
                message.set(String::new());
                on_submit.run(ArtifactDraft {
                    title,
                    summary,
                    content,
                    status: status.get(),
                });
            }
            Err(msg) => message.set(msg.to_owned()),
        }
    };

    view! {
        <form class="artifact-form" on:submit=on_submit_ev>
            <label class="artifact-form__label">
                "Title"
                <input
                    class="artifact-form__input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="artifact-form__label">
                "Summary"
                <input
                    class="artifact-form__input"
                    type="text"
                    prop:value=move || summary.get()
                    on:input=move |ev| summary.set(event_target_value(&ev))
                />
            </label>
            <label class="artifact-form__label">
                "Content"
                <textarea
                    class="artifact-form__textarea"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="artifact-form__label">
                "Status"
                <select
                    class="artifact-form__select"
                    prop:value=move || status.get().as_label().to_owned()
                    on:change=move |ev| {
                        status.set(event_target_value(&ev).parse().unwrap_or_default());
                    }
                >
                    {ArtifactStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.as_label()>{s.as_label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="artifact-form__label">
                "Attached File"
                <input class="artifact-form__file" type="file" node_ref=file_input />
            </label>
            <Show when=move || !message.get().is_empty()>
                <p class="artifact-form__message">{move || message.get()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}
