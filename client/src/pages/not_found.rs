//! Fallback for unmatched routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    log::warn!("404: no route matches {}", location.pathname.get_untracked());

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__text">"Oops! Page not found"</p>
            <a href="/" class="not-found__link">"Return to Home"</a>
        </div>
    }
}
