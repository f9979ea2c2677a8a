//! Home page listing all published-or-otherwise public artifacts.

use leptos::prelude::*;
use records::Artifact;

use crate::components::artifact_card::ArtifactCard;
use crate::state::toast::ToastState;

/// Public landing route: fetches the artifact list once and renders a grid
/// of cards. A failed fetch surfaces one error toast.
#[component]
pub fn HomePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let artifacts = RwSignal::new(Vec::<Artifact>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_artifacts().await {
                Ok(items) => artifacts.set(items),
                Err(e) => {
                    crate::state::toast::push_error(toasts, e);
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = toasts;
        loading.set(false);
    }

    view! {
        <section class="home-page">
            <h1 class="page-title">"Artifacts"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-note">"Loading..."</p> }
            >
                <Show
                    when=move || !artifacts.get().is_empty()
                    fallback=|| view! { <p class="page-note">"No artifacts yet."</p> }
                >
                    <div class="artifact-grid">
                        <For
                            each=move || artifacts.get()
                            key=|artifact| artifact.id.clone()
                            let:artifact
                        >
                            <ArtifactCard artifact />
                        </For>
                    </div>
                </Show>
            </Show>
        </section>
    }
}
