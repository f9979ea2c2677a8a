//! Create-artifact page: authenticated multipart submit.

#[cfg(test)]
#[path = "create_artifact_test.rs"]
mod create_artifact_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::ArtifactDraft;

use crate::components::artifact_form::ArtifactForm;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// New-artifact form. Required-field validation happens inside
/// [`ArtifactForm`]; a validated draft is posted with any selected file, and
/// success navigates in-app to the personal list with a confirmation toast.
#[component]
pub fn CreateArtifactPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    // Route changes in-app; a full page load here would rebuild the toast
    // queue and drop the confirmation.
    Effect::new(move || {
        if saved.get() {
            navigate("/personal-artifacts", NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |draft: ArtifactDraft| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let file = file_input
                    .get_untracked()
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0));
                match crate::net::api::create_artifact(&token, &draft, file.as_ref()).await {
                    Ok(_) => {
                        crate::state::toast::push_success(toasts, "Artifact created.");
                        saved.set(true);
                    }
                    Err(e) => {
                        crate::state::toast::push_error(toasts, e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (draft, toasts);
        }
    });

    view! {
        <section class="form-page">
            <h1 class="page-title">"Create Artifact"</h1>
            <ArtifactForm submit_label="Create Artifact" busy=busy file_input on_submit />
        </section>
    }
}
