//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload a Document"</h1>
            <p class="subtitle">
                "Upload lecture notes, papers, or books. "
                "Get summaries, answers to your questions, and auto-generated quizzes."
            </p>
        </div>
    }
}
