//! Personal-artifacts page: the signed-in user's records, with deletion.

#[cfg(test)]
#[path = "personal_artifacts_test.rs"]
mod personal_artifacts_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::Artifact;

use crate::components::artifact_card::ArtifactCard;
use crate::components::modal::Modal;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Drop a deleted artifact from the local list.
pub(crate) fn remove_artifact(items: &mut Vec<Artifact>, id: &str) {
    items.retain(|artifact| artifact.id != id);
}

/// Authenticated list of the user's own artifacts. Each row opens the usual
/// detail modal and offers a delete action behind a confirm dialog.
#[component]
pub fn PersonalArtifactsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let artifacts = RwSignal::new(Vec::<Artifact>::new());
    let loading = RwSignal::new(true);
    let requested = RwSignal::new(false);
    let delete_pending = RwSignal::new(None::<Artifact>);

    // Fetch once the session is available; the initial profile fetch may
    // still be resolving when this page mounts.
    Effect::new(move || {
        let Some(token) = auth.get().token().map(str::to_owned) else {
            return;
        };
        if requested.get_untracked() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_artifacts(&token).await {
                Ok(items) => artifacts.set(items),
                Err(e) => {
                    crate::state::toast::push_error(toasts, e);
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, toasts);
            loading.set(false);
        }
    });

    let on_delete_cancel = Callback::new(move |()| delete_pending.set(None));
    let on_delete_confirm = move |_| {
        let Some(artifact) = delete_pending.get_untracked() else {
            return;
        };
        delete_pending.set(None);

        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_artifact(&token, &artifact.id).await {
                    Ok(()) => {
                        artifacts.update(|items| remove_artifact(items, &artifact.id));
                        crate::state::toast::push_success(toasts, "Artifact deleted.");
                    }
                    Err(e) => {
                        crate::state::toast::push_error(toasts, e);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = artifact;
        }
    };

    let pending_title = move || {
        delete_pending
            .get()
            .map_or_else(String::new, |artifact| artifact.title)
    };

    view! {
        <section class="personal-page">
            <h1 class="page-title">"My Artifacts"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-note">"Loading..."</p> }
            >
                <Show
                    when=move || !artifacts.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="page-note">
                                "Nothing here yet. "
                                <a href="/create-artifact">"Create your first artifact."</a>
                            </p>
                        }
                    }
                >
                    <div class="artifact-grid">
                        <For
                            each=move || artifacts.get()
                            key=|artifact| artifact.id.clone()
                            let:artifact
                        >
                            <div class="personal-page__item">
                                <ArtifactCard artifact=artifact.clone() />
                                <button
                                    class="personal-page__delete"
                                    title="Delete artifact"
                                    aria-label="Delete artifact"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        delete_pending.set(Some(artifact.clone()));
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        </For>
                    </div>
                </Show>
            </Show>
            <Modal
                open=Signal::derive(move || delete_pending.get().is_some())
                on_close=on_delete_cancel
            >
                <div class="confirm-dialog">
                    <h2 class="confirm-dialog__title">"Delete artifact"</h2>
                    <p class="confirm-dialog__text">
                        "Delete \"" {pending_title} "\"? This cannot be undone."
                    </p>
                    <div class="confirm-dialog__actions">
                        <button class="btn" on:click=move |_| on_delete_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=on_delete_confirm>
                            "Delete"
                        </button>
                    </div>
                </div>
            </Modal>
        </section>
    }
}
