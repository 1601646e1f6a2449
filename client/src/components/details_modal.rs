//! Full description of one featured listing.

use leptos::prelude::*;

use crate::data::Listing;
use crate::util::dom::{focus_on_mount, is_dismiss_key};

#[component]
pub fn DetailsModal(listing: Listing, on_close: Callback<()>) -> impl IntoView {
    let dialog = NodeRef::<leptos::html::Div>::new();
    focus_on_mount(dialog);

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div id="details-modal" class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="card modal"
                node_ref=dialog
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <img id="modal-img" class="modal__image" src=listing.image alt=listing.title.clone()/>
                <h3 id="modal-title" class="modal__title">{listing.title}</h3>
                <p id="modal-location" class="modal__muted">{listing.location}</p>
                <p id="modal-price" class="modal__price">{listing.price}</p>
                <p id="modal-desc">{listing.description}</p>
                <button class="btn btn--accent modal__action">"Contact Landlord"</button>
            </div>
        </div>
    }
}
