//! New-listing form with the location picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing is persisted. A successful submit only raises a toast and returns
//! to the property list; the map pin is the one field checked here rather than
//! by the browser's `required` handling.

#[cfg(test)]
#[path = "add_property_test.rs"]
mod add_property_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::map_picker_dialog::MapPickerDialog;
use crate::components::toast_host::notify;
use crate::map::Coordinate;
use crate::state::add_property::{AddPropertyForm, Amenity, PropertyKind, SubmitOutcome};
use crate::state::map_picker::MapPicker;
use crate::state::toast::ToastState;

const PROPERTIES_PATH: &str = "/landlord/properties";

/// Where a submit leaves the landlord: back to the list, or nowhere.
fn destination(outcome: SubmitOutcome) -> Option<&'static str> {
    match outcome {
        SubmitOutcome::Submitted { .. } => Some(PROPERTIES_PATH),
        SubmitOutcome::MissingPin => None,
    }
}

#[component]
pub fn AddPropertyPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(AddPropertyForm::default());
    let picker = RwSignal::new(MapPicker::default());

    let on_pick = Callback::new(move |_: Coordinate| form.update(AddPropertyForm::pin_selected));

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let pin = picker.with_untracked(|p| p.selected);
        let Some(outcome) = form.try_update(|f| f.submit(pin)) else {
            return;
        };
        match (outcome, destination(outcome)) {
            (SubmitOutcome::Submitted { at }, Some(path)) => {
                log::info!("property submitted at {}", at.label());
                notify(toasts, "Property Submitted!", "Your property has been submitted for verification.");
                submit_navigate(path, NavigateOptions::default());
            }
            _ => log::debug!("property submit blocked: no map pin"),
        }
    };
    let on_cancel = move |_: leptos::ev::MouseEvent| navigate(PROPERTIES_PATH, NavigateOptions::default());

    view! {
        <div class="page add-property">
            <header class="page__header">
                <h1 class="page__title">"Add New Property"</h1>
                <p class="page__subtitle">"List your rental property for potential tenants"</p>
            </header>

            <form class="form" on:submit=on_submit>
                <section class="card">
                    <h2 class="card__title">"Basic Information"</h2>
                    <div class="form__row">
                        <label class="form__field">
                            "Property Title"
                            <input
                                id="title"
                                class="input"
                                placeholder="e.g., Modern 2BR Apartment in Kilimani"
                                required
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.title = value);
                                }
                            />
                        </label>
                        <label class="form__field">
                            "Property Type"
                            <select
                                id="type"
                                class="input"
                                required
                                on:change=move |ev| {
                                    let kind = event_target_value(&ev).parse::<PropertyKind>().ok();
                                    form.update(|f| f.kind = kind);
                                }
                            >
                                <option value="">"Select property type"</option>
                                {PropertyKind::ALL
                                    .iter()
                                    .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <div class="form__row">
                        <div class="form__field">
                            <label for="location">"Location"</label>
                            <div class="input-group">
                                <input
                                    id="location"
                                    class="input"
                                    placeholder="e.g., Kilimani, Nairobi"
                                    required
                                    prop:value=move || form.with(|f| f.location.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.location = value);
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn--outline btn--icon"
                                    title="Pick on Map"
                                    on:click=move |_| picker.update(MapPicker::open_dialog)
                                >
                                    "⌖"
                                </button>
                            </div>
                            {move || {
                                picker
                                    .with(|p| p.selected)
                                    .map(|at| view! { <span class="badge pin-badge">{format!("Pin dropped: {}", at.label())}</span> })
                            }}
                            {move || form.with(|f| f.pin_error).map(|msg| view! { <p class="form__error">{msg}</p> })}
                        </div>
                        <label class="form__field">
                            "Monthly Rent (KSh)"
                            <input
                                id="rent"
                                class="input"
                                type="number"
                                placeholder="e.g., 45000"
                                required
                                prop:value=move || form.with(|f| f.rent.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.rent = value);
                                }
                            />
                        </label>
                    </div>
                    <label class="form__field">
                        "Description"
                        <textarea
                            id="description"
                            class="input"
                            rows="4"
                            placeholder="Describe your property, including features, nearby amenities, etc."
                            required
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.description = value);
                            }
                        ></textarea>
                    </label>
                </section>

                <section class="card">
                    <h2 class="card__title">"Property Photos"</h2>
                    <p class="card__subtitle">"Upload 3-5 high-quality photos of your property"</p>
                    <div class="dropzone">
                        <span class="dropzone__icon">"🖼"</span>
                        <p>"Drag and drop photos here, or click to browse"</p>
                        <button type="button" class="btn btn--outline">"⇪ Choose Photos"</button>
                    </div>
                </section>

                <section class="card">
                    <h2 class="card__title">"Amenities"</h2>
                    <p class="card__subtitle">"Select all amenities available in your property"</p>
                    <div class="amenity-grid">
                        {Amenity::ALL
                            .into_iter()
                            .map(|amenity| {
                                view! {
                                    <label class="amenity">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with(|f| f.has_amenity(amenity))
                                            on:change=move |_| form.update(|f| f.toggle_amenity(amenity))
                                        />
                                        <span>{amenity.label()}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="card">
                    <h2 class="card__title">"Verification Documents"</h2>
                    <p class="card__subtitle">"Upload required documents for property verification"</p>
                    <div class="notice">
                        <h4>"Required Documents:"</h4>
                        <ul>
                            <li>"• Valid ID or Passport"</li>
                            <li>"• Property ownership documents"</li>
                            <li>"• Recent utility bill"</li>
                        </ul>
                    </div>
                    <div class="dropzone">
                        <span class="dropzone__icon">"▤"</span>
                        <p>"Upload verification documents"</p>
                        <button type="button" class="btn btn--outline">"⇪ Choose Documents"</button>
                    </div>
                </section>

                <div class="form__actions">
                    <button type="button" class="btn btn--outline" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--highlight btn--lg">
                        "Submit for Review"
                    </button>
                </div>
                <p class="form__note">"🛈 Your listing will be reviewed and verified before going live"</p>
            </form>

            <MapPickerDialog picker=picker on_pick=on_pick/>
        </div>
    }
}
