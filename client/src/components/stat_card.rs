//! Headline metric card used on the landlord dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    icon: &'static str,
    /// Modifier for the icon bubble colour, e.g. `accent` or `success`.
    #[prop(default = "accent")]
    tone: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class=format!("stat-card__icon stat-card__icon--{tone}")>{icon}</div>
            <div class="stat-card__body">
                <p class="stat-card__title">{title}</p>
                <p class="stat-card__value">{value}</p>
                {description.map(|text| view! { <p class="stat-card__description">{text}</p> })}
            </div>
        </div>
    }
}
