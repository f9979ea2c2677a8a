//! Clickable summary tile for one artifact.
//!
//! DESIGN
//! ======
//! Each card owns one modal open flag; clicking anywhere on the tile opens a
//! modal with the full detail view, and closing it only resets the flag —
//! the card itself stays mounted.

#[cfg(test)]
#[path = "artifact_card_test.rs"]
mod artifact_card_test;

use leptos::prelude::*;
use records::{Artifact, ArtifactStatus};

use crate::components::artifact_detail::ArtifactDetail;
use crate::components::modal::Modal;

/// Card header text: title plus the status label.
pub(crate) fn card_header(title: &str, status: ArtifactStatus) -> String {
    format!("{title} ({status})")
}

/// Summary tile that opens a detail modal on click.
#[component]
pub fn ArtifactCard(artifact: Artifact) -> impl IntoView {
    let open = RwSignal::new(false);
    let on_close = Callback::new(move |()| open.set(false));

    let header = card_header(&artifact.title, artifact.status);
    let summary = artifact.summary.clone();
    let detail = artifact;

    view! {
        <div class="artifact-card" on:click=move |_| open.set(true)>
            <h2 class="artifact-card__header">{header}</h2>
            <p class="artifact-card__summary">{summary}</p>
        </div>
        <Modal open=open on_close=on_close>
            <ArtifactDetail artifact=detail.clone() />
        </Modal>
    }
}
