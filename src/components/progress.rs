use leptos::*;

/// Indeterminate activity indicator shown while an upload is in flight.
#[component]
pub fn ProgressBar() -> impl IntoView {
    view! {
        <div class="progress-bar" id="progressBar">
            <div class="progress-fill indeterminate"></div>
        </div>
    }
}
