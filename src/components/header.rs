use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"📚 " {APP_NAME}</a>
            </div>
            <div class="header-right">
                <a href="/" class="nav-link">"My Documents"</a>
            </div>
        </header>
    }
}
