//! Update-artifact page: fetch by route id, pre-populate, multipart submit.

#[cfg(test)]
#[path = "update_artifact_test.rs"]
mod update_artifact_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::{Artifact, ArtifactDraft};

use crate::components::artifact_form::ArtifactForm;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Normalize the `:id` route parameter; `None` means the route is unusable.
pub(crate) fn route_artifact_id(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// Fetch lifecycle for the artifact being edited.
#[derive(Clone, Debug, PartialEq)]
enum ArtifactLoad {
    Loading,
    Ready(Artifact),
    NotFound,
}

/// Edit form for one artifact. A missing route parameter or a backend
/// not-found renders an in-page not-found state instead of a form.
#[component]
pub fn UpdateArtifactPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

    let params = use_params_map();
    let load = RwSignal::new(ArtifactLoad::Loading);
    let requested = RwSignal::new(None::<String>);
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

    // Fetch whenever the route id changes; re-renders of the same id reuse
    // the request already in flight.
    Effect::new(move || {
        let Some(id) = route_artifact_id(params.read().get("id")) else {
            load.set(ArtifactLoad::NotFound);
            return;
        };
        if requested.get_untracked().as_deref() == Some(id.as_str()) {
            return;
        }
        requested.set(Some(id.clone()));
        load.set(ArtifactLoad::Loading);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_artifact(&id).await {
                Ok(Some(artifact)) => load.set(ArtifactLoad::Ready(artifact)),
                Ok(None) => load.set(ArtifactLoad::NotFound),
                Err(e) => {
                    crate::state::toast::push_error(toasts, e);
                    load.set(ArtifactLoad::NotFound);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = toasts;
        }
    });

    let on_submit = Callback::new(move |draft: ArtifactDraft| {
        if busy.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(id) = requested.get_untracked() else {
                return;
            };
            let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let file = file_input
                    .get_untracked()
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0));
                match crate::net::api::update_artifact(&token, &id, &draft, file.as_ref()).await {
                    Ok(_) => {
                        crate::state::toast::push_success(toasts, "Artifact updated.");
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
            let _ = draft;
        }
    });

    view! {
        <section class="form-page">
            <h1 class="page-title">"Update Artifact"</h1>
            {move || match load.get() {
                ArtifactLoad::Loading => {
                    view! { <p class="page-note">"Loading..."</p> }.into_any()
                }
                ArtifactLoad::NotFound => {
                    view! {
                        <div class="not-found">
                            <p class="page-note">"That artifact does not exist."</p>
                            <a class="btn" href="/">"Back to Home"</a>
                        </div>
                    }
                    .into_any()
                }
                ArtifactLoad::Ready(artifact) => {
                    view! {
                        <ArtifactForm
                            initial=artifact
                            submit_label="Update Artifact"
                            busy=busy
                            file_input
                            on_submit
                        />
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
