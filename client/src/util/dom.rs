//! Small DOM reads and writes used by the landing page.
//!
//! All functions no-op (or report nothing) outside the browser build so SSR
//! renders stay deterministic.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Key that closes any open modal.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Give `node` keyboard focus once it is mounted so its key handlers fire
/// without the user clicking into it first.
pub fn focus_on_mount(node: NodeRef<Div>) {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(element) = node.get()
            && let Err(e) = element.focus()
        {
            log::debug!("modal focus failed: {e:?}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = node;
}

/// Current vertical scroll position of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// `offsetTop` of the element with `id`, if it exists.
pub fn element_top(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Smooth-scroll the element with `id` horizontally by `dx` pixels.
pub fn scroll_horizontally(id: &str, dx: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_left(dx);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_by_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, dx);
    }
}
