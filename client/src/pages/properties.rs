//! "My Properties" grid.

use leptos::prelude::*;

use crate::components::error_panel::{ErrorPanel, load};
use crate::components::status_badge::StatusBadge;
use crate::data::{Catalog, Property};

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();

    let body = match load(catalog.properties.as_ref()) {
        Ok(properties) if properties.is_empty() => empty_state().into_any(),
        Ok(properties) => view! {
            <div class="property-grid">{properties.into_iter().map(property_card).collect_view()}</div>
        }
        .into_any(),
        Err(error) => view! { <ErrorPanel error=error/> }.into_any(),
    };

    view! {
        <div class="page properties">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"My Properties"</h1>
                    <p class="page__subtitle">"Manage your rental property listings"</p>
                </div>
                <a href="/landlord/properties/new" class="btn btn--highlight btn--lg">
                    "+ Add Property"
                </a>
            </header>
            {body}
        </div>
    }
}

fn property_card(property: Property) -> impl IntoView {
    view! {
        <div class="card property-card">
            <div class="property-card__media">
                <img src=property.image alt=property.title.clone()/>
                <div class="property-card__badge">
                    <StatusBadge status=property.status/>
                </div>
            </div>
            <div class="property-card__body">
                <h3 class="property-card__title">{property.title}</h3>
                <p class="property-card__location">"⌖ " {property.location}</p>
                <div class="property-card__meta">
                    <span class="property-card__price">
                        {property.price} <span class="property-card__period">"/month"</span>
                    </span>
                    <span class="property-card__views">{format!("{} views", property.views)}</span>
                </div>
                <div class="property-card__actions">
                    <button type="button" class="btn btn--accent btn--sm">"Edit"</button>
                    <button type="button" class="btn btn--outline btn--sm">"Preview"</button>
                    <button type="button" class="btn btn--outline btn--icon" title="Delete">"🗑"</button>
                </div>
            </div>
        </div>
    }
}

fn empty_state() -> impl IntoView {
    view! {
        <div class="card empty-card">
            <span class="empty-card__icon">"▦"</span>
            <h3>"No Properties Yet"</h3>
            <p>"Start by adding your first rental property"</p>
            <a href="/landlord/properties/new" class="btn btn--highlight btn--lg">
                "+ Add Your First Property"
            </a>
        </div>
    }
}
