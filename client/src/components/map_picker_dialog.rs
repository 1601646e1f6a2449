//! Dialog for dropping a pin on the property's location.
//!
//! ARCHITECTURE
//! ============
//! Every widget callback becomes a [`PickerEvent`]; `MapPicker::handle` decides
//! what changes and the resulting [`MapUpdate`] is pushed through a signal to
//! an effect that owns the map widget. The widget itself only exists in the
//! browser build; during SSR the dialog renders its loading placeholder.
//!
//! The Maps loader may still be fetching when the dialog opens. The panel
//! polls for the library while it is open and mounts as soon as it appears.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::map::google::GoogleMapProvider;
#[cfg(feature = "hydrate")]
use crate::map::{DEFAULT_ZOOM, MapError, MapProvider, apply_update};
use crate::map::{Coordinate, MapUpdate};
#[cfg(feature = "hydrate")]
use crate::state::map_picker::mount_due;
use crate::state::map_picker::{MapPicker, PickerEvent};
use crate::util::dom::{focus_on_mount, is_dismiss_key};
use crate::util::geolocation::request_position;

/// Renders nothing until `picker.open`; `on_pick` runs for every selected coordinate.
#[component]
pub fn MapPickerDialog(picker: RwSignal<MapPicker>, on_pick: Callback<Coordinate>) -> impl IntoView {
    view! {
        <Show when=move || picker.with(|p| p.open)>
            <MapPickerPanel picker=picker on_pick=on_pick/>
        </Show>
    }
}

#[component]
fn MapPickerPanel(picker: RwSignal<MapPicker>, on_pick: Callback<Coordinate>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let dialog = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    let library_loaded = RwSignal::new(false);
    let map_ready = RwSignal::new(false);
    let redraw = RwSignal::new(MapUpdate::default());
    focus_on_mount(dialog);

    let dispatch = move |event: PickerEvent| {
        let Some(update) = picker.try_update(|p| p.handle(event)) else {
            return;
        };
        if let Some(at) = update.marker {
            on_pick.run(at);
        }
        if !update.is_empty() {
            redraw.set(update);
        }
    };

    #[cfg(feature = "hydrate")]
    let provider = Rc::new(RefCell::new(None::<GoogleMapProvider>));

    // Stops on its own once the library is present or the panel is gone.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::map_picker::LIBRARY_POLL_MS;

        loop {
            if crate::map::google::is_loaded() {
                let _ = library_loaded.try_set(true);
                break;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(LIBRARY_POLL_MS))).await;
            if library_loaded.try_get_untracked().is_none() {
                break;
            }
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let provider = Rc::clone(&provider);
        Effect::new(move || {
            let loaded = library_loaded.get();
            let element = container.get();
            if !mount_due(provider.borrow().is_some(), element.is_some(), loaded) {
                return;
            }
            let Some(element) = element else {
                return;
            };
            let mut map = GoogleMapProvider::default();
            let center = picker.with_untracked(MapPicker::center);
            let on_click = Box::new(move |at: Coordinate| dispatch(PickerEvent::Clicked(at)));
            match map.mount(&element, center, DEFAULT_ZOOM, on_click) {
                Ok(()) => {
                    if let Some(at) = picker.with_untracked(|p| p.selected)
                        && let Err(e) = map.show_marker(at)
                    {
                        log::warn!("restoring map pin failed: {e}");
                    }
                    *provider.borrow_mut() = Some(map);
                    map_ready.set(true);
                }
                Err(e) => log::warn!("map picker unavailable: {e}"),
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let provider = Rc::clone(&provider);
        Effect::new(move || {
            let update = redraw.get();
            if update.is_empty() {
                return;
            }
            if let Some(map) = provider.borrow_mut().as_mut()
                && let Err(e) = apply_update(map, update)
            {
                log::warn!("map redraw failed: {e}");
            }
        });
    }

    #[cfg(feature = "hydrate")]
    let search_provider = Rc::clone(&provider);
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = picker.with_untracked(|p| p.search.trim().to_owned());
        if query.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let on_result = Box::new(move |result: Result<Coordinate, MapError>| match result {
                Ok(at) => dispatch(PickerEvent::PlaceFound(at)),
                Err(e) => log::warn!("place search failed: {e}"),
            });
            match search_provider.borrow().as_ref() {
                Some(map) => map.search(&query, on_result),
                None => on_result(Err(MapError::Unavailable)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        log::debug!("place search for `{query}` ignored outside the browser");
    };

    let on_locate = move |_: leptos::ev::MouseEvent| {
        dispatch(PickerEvent::LocateStarted);
        request_position(move |outcome| match outcome {
            Ok(at) => dispatch(PickerEvent::Located(at)),
            Err(e) => {
                log::debug!("geolocation failed: {e}");
                dispatch(PickerEvent::LocateFailed);
            }
        });
    };

    let close = move || picker.update(MapPicker::close_dialog);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            close();
        }
    });

    view! {
        <div class="modal__backdrop" on:click=move |_| close()>
            <div
                class="card modal map-picker"
                node_ref=dialog
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2 class="modal__title">"Pick Property Location"</h2>
                <form class="map-picker__toolbar" on:submit=on_search>
                    <input
                        class="input"
                        placeholder="Search for a place or address..."
                        autofocus
                        prop:value=move || picker.with(|p| p.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            picker.update(|p| p.search = value);
                        }
                    />
                    <button type="button" class="btn btn--outline" title="Use my location" on:click=on_locate>
                        {move || if picker.with(|p| p.locating) { "…" } else { "◎" }}
                    </button>
                </form>
                <div class="map-picker__canvas">
                    <div class="map-picker__map" node_ref=container></div>
                    <Show when=move || !map_ready.get()>
                        <div class="map-picker__placeholder">"Loading map..."</div>
                    </Show>
                </div>
                <p class="map-picker__selection">
                    {move || picker.with(|p| p.selected.map(Coordinate::label).unwrap_or_default())}
                </p>
                <div class="modal__actions">
                    <button type="button" class="btn btn--outline" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="btn btn--highlight"
                        disabled=move || !picker.with(MapPicker::can_confirm)
                        on:click=move |_| close()
                    >
                        "Use Location"
                    </button>
                </div>
            </div>
        </div>
    }
}
