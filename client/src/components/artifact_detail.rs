//! Read-only artifact detail view shown inside the card modal.

#[cfg(test)]
#[path = "artifact_detail_test.rs"]
mod artifact_detail_test;

use leptos::prelude::*;
use records::Artifact;

/// Route to the update form for an artifact.
pub(crate) fn update_href(id: &str) -> String {
    format!("/update-artifact/{id}")
}

/// Attached-file URL, treating an empty string from the backend as absent.
pub(crate) fn attachment_url(artifact: &Artifact) -> Option<&str> {
    artifact.file_url.as_deref().filter(|url| !url.is_empty())
}

/// Labeled read-only fields for one artifact, a file link when an
/// attachment exists, and a link to the update form.
#[component]
pub fn ArtifactDetail(artifact: Artifact) -> impl IntoView {
    let update = update_href(&artifact.id);
    let file_link = attachment_url(&artifact).map(|url| {
        let url = url.to_owned();
        view! {
            <div class="artifact-detail__field">
                <span class="artifact-detail__label">"Attached File"</span>
                <a
                    class="artifact-detail__file-link"
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View Attached File"
                </a>
            </div>
        }
    });

    view! {
        <div class="artifact-detail">
            <h2 class="artifact-detail__title">"Artifact Detail"</h2>
            <div class="artifact-detail__field">
                <span class="artifact-detail__label">"Status"</span>
                <span class="artifact-detail__value">{artifact.status.as_label()}</span>
            </div>
            <div class="artifact-detail__field">
                <span class="artifact-detail__label">"Title"</span>
                <span class="artifact-detail__value">{artifact.title.clone()}</span>
            </div>
            <div class="artifact-detail__field">
                <span class="artifact-detail__label">"Content"</span>
                <span class="artifact-detail__value artifact-detail__value--prewrap">
                    {artifact.content.clone()}
                </span>
            </div>
            <div class="artifact-detail__field">
                <span class="artifact-detail__label">"Summary"</span>
                <span class="artifact-detail__value">{artifact.summary.clone()}</span>
            </div>
            {file_link}
            <div class="artifact-detail__actions">
                <a class="btn btn--primary" href=update>"Update Artifact"</a>
            </div>
        </div>
    }
}
