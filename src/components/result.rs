//! Result panel shown after an upload attempt.

use leptos::*;

use crate::config::study_page_url;
use crate::types::{ProcessedDocument, UploadError};

/// Renders the outcome of the last submission.
///
/// Success shows the processed document's stats and a link to its
/// study page; every failure shows its message text. Nothing is
/// rendered before the first attempt.
#[component]
pub fn ResultPanel(
    outcome: ReadSignal<Option<Result<ProcessedDocument, UploadError>>>,
) -> impl IntoView {
    move || match outcome.get() {
        Some(Ok(doc)) => view! {
            <div class="result-message success" id="result">
                <h3>"✓ Document Processed Successfully!"</h3>
                <p>"Filename: " {doc.filename}</p>
                <p>"Words: " {doc.word_count} " | Sentences: " {doc.sentence_count}</p>
                // Plain anchor: the study page is served by the backend,
                // not routed inside this app.
                <a href=study_page_url(&doc.doc_id) class="btn btn-primary">
                    "Start Studying →"
                </a>
            </div>
        }
        .into_view(),
        Some(Err(err)) => view! {
            <div class="result-message error" id="result">
                <p>"Error: " {err.to_string()}</p>
            </div>
        }
        .into_view(),
        None => ().into_view(),
    }
}
