//! Featured-listing card in the landing carousel.

use leptos::prelude::*;

use crate::data::Listing;

#[component]
pub fn ListingCard(
    listing: Listing,
    #[prop(into)] favorite: Signal<bool>,
    on_favorite: Callback<()>,
    on_details: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card listing-card">
            <div class="listing-card__media">
                <img src=listing.image.clone() alt=listing.title.clone() class="listing-card__image"/>
                <span class=listing.badge_tone.class()>{listing.badge.clone()}</span>
                <button
                    class="listing-card__favorite"
                    class:listing-card__favorite--on=move || favorite.get()
                    aria-label="Add to favorites"
                    on:click=move |_| on_favorite.run(())
                >
                    {move || if favorite.get() { "♥" } else { "♡" }}
                </button>
            </div>
            <div class="listing-card__body">
                <h3 class="listing-card__title">{listing.title}</h3>
                <p class="listing-card__location">{listing.location}</p>
                <p class="listing-card__price">{listing.price}</p>
                <button class="btn btn--primary listing-card__details" on:click=move |_| on_details.run(())>
                    "View Details"
                </button>
            </div>
        </div>
    }
}
