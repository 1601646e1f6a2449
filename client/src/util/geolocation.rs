//! Browser geolocation: one request, one callback.
//!
//! There is no timeout, retry or cancellation; outside the browser build the
//! callback fires immediately with [`GeolocationError::Unsupported`].

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use thiserror::Error;

use crate::map::Coordinate;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("geolocation is not available in this environment")]
    Unsupported,
    #[error("position request failed: {0}")]
    Failed(String),
}

/// Ask for the current position and hand the outcome to `on_done`.
pub fn request_position(on_done: impl FnOnce(Result<Coordinate, GeolocationError>) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        browser::request_position(on_done);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        on_done(Err(GeolocationError::Unsupported));
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Reflect;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::{Coordinate, GeolocationError};

    type Pending = Rc<RefCell<Option<Box<dyn FnOnce(Result<Coordinate, GeolocationError>)>>>>;

    fn finish(pending: &Pending, outcome: Result<Coordinate, GeolocationError>) {
        if let Some(on_done) = pending.borrow_mut().take() {
            on_done(outcome);
        }
    }

    pub(super) fn request_position(on_done: impl FnOnce(Result<Coordinate, GeolocationError>) + 'static) {
        let pending: Pending = Rc::new(RefCell::new(Some(Box::new(on_done))));

        let geolocation = web_sys::window().and_then(|w| w.navigator().geolocation().ok());
        let Some(geolocation) = geolocation else {
            finish(&pending, Err(GeolocationError::Unsupported));
            return;
        };

        let on_success = {
            let pending = pending.clone();
            Closure::once_into_js(move |position: JsValue| {
                let outcome = read_coords(&position)
                    .ok_or_else(|| GeolocationError::Failed("position had no coordinates".to_owned()));
                finish(&pending, outcome);
            })
        };
        let on_error = {
            let pending = pending.clone();
            Closure::once_into_js(move |error: JsValue| {
                let message = Reflect::get(&error, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
                    .unwrap_or_else(|| "unknown error".to_owned());
                finish(&pending, Err(GeolocationError::Failed(message)));
            })
        };

        if let Err(e) = geolocation
            .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
        {
            finish(&pending, Err(GeolocationError::Failed(format!("{e:?}"))));
        }
    }

    fn read_coords(position: &JsValue) -> Option<Coordinate> {
        let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
        let lat = Reflect::get(&coords, &JsValue::from_str("latitude")).ok()?.as_f64()?;
        let lng = Reflect::get(&coords, &JsValue::from_str("longitude")).ok()?.as_f64()?;
        Some(Coordinate::new(lat, lng))
    }
}
