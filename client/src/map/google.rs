//! Google Maps JS API implementation of [`MapProvider`].
//!
//! The HTML shell loads `maps.googleapis.com/maps/api/js` when the host has a
//! `MAPS_API_KEY`; without it [`is_loaded`] is false and `mount` reports
//! [`MapError::Unavailable`].

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{Coordinate, MapError, MapProvider};

mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    extern "C" {
        pub type Map;

        #[wasm_bindgen(constructor)]
        pub fn new(container: &web_sys::HtmlElement, options: &JsValue) -> Map;

        #[wasm_bindgen(method, js_name = panTo)]
        pub fn pan_to(this: &Map, at: &JsValue);

        #[wasm_bindgen(method, js_name = addListener)]
        pub fn add_listener(this: &Map, event: &str, handler: &js_sys::Function) -> JsValue;

        pub type Marker;

        #[wasm_bindgen(constructor)]
        pub fn new(options: &JsValue) -> Marker;

        #[wasm_bindgen(method, js_name = setPosition)]
        pub fn set_position(this: &Marker, at: &JsValue);

        pub type Geocoder;

        #[wasm_bindgen(constructor)]
        pub fn new() -> Geocoder;

        #[wasm_bindgen(method)]
        pub fn geocode(this: &Geocoder, request: &JsValue) -> js_sys::Promise;
    }
}

/// True once `window.google.maps.Map` exists.
pub fn is_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    ["google", "maps", "Map"]
        .iter()
        .try_fold(JsValue::from(window), |scope, key| {
            Reflect::get(&scope, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
        .is_some()
}

#[derive(Default)]
pub struct GoogleMapProvider {
    map: Option<ffi::Map>,
    marker: Option<ffi::Marker>,
    click_handler: Option<Closure<dyn FnMut(JsValue)>>,
}

impl GoogleMapProvider {
    fn map(&self) -> Result<&ffi::Map, MapError> {
        self.map.as_ref().ok_or(MapError::Unavailable)
    }
}

impl MapProvider for GoogleMapProvider {
    type Container = web_sys::HtmlElement;

    fn mount(
        &mut self,
        container: &web_sys::HtmlElement,
        center: Coordinate,
        zoom: u8,
        on_click: Box<dyn Fn(Coordinate)>,
    ) -> Result<(), MapError> {
        if !is_loaded() {
            return Err(MapError::Unavailable);
        }
        let options = object(&[("center", lat_lng(center)), ("zoom", JsValue::from(zoom))])?;
        let map = ffi::Map::new(container, &options);

        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let clicked = Reflect::get(&event, &JsValue::from_str("latLng"))
                .ok()
                .and_then(|ll| read_lat_lng(&ll));
            if let Some(at) = clicked {
                on_click(at);
            }
        });
        map.add_listener("click", handler.as_ref().unchecked_ref());

        self.map = Some(map);
        self.marker = None;
        self.click_handler = Some(handler);
        Ok(())
    }

    fn show_marker(&mut self, at: Coordinate) -> Result<(), MapError> {
        if let Some(marker) = &self.marker {
            marker.set_position(&lat_lng(at));
            return Ok(());
        }
        let map: &JsValue = self.map()?.as_ref();
        let options = object(&[("position", lat_lng(at)), ("map", map.clone())])?;
        self.marker = Some(ffi::Marker::new(&options));
        Ok(())
    }

    fn pan_to(&mut self, at: Coordinate) -> Result<(), MapError> {
        self.map()?.pan_to(&lat_lng(at));
        Ok(())
    }

    fn search(&self, query: &str, on_result: Box<dyn FnOnce(Result<Coordinate, MapError>)>) {
        if !is_loaded() {
            on_result(Err(MapError::Unavailable));
            return;
        }
        let request = match object(&[("address", JsValue::from_str(query))]) {
            Ok(request) => request,
            Err(e) => {
                on_result(Err(e));
                return;
            }
        };
        let promise = ffi::Geocoder::new().geocode(&request);
        let query = query.to_owned();
        leptos::task::spawn_local(async move {
            let result = match JsFuture::from(promise).await {
                Ok(response) => first_result_location(&response).ok_or(MapError::NoMatch(query)),
                Err(e) => Err(MapError::Widget(format!("{e:?}"))),
            };
            on_result(result);
        });
    }
}

fn object(entries: &[(&str, JsValue)]) -> Result<JsValue, MapError> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value).map_err(|e| MapError::Widget(format!("{e:?}")))?;
    }
    Ok(obj.into())
}

fn lat_lng(at: Coordinate) -> JsValue {
    let obj = Object::new();
    let _ = Reflect::set(&obj, &JsValue::from_str("lat"), &JsValue::from_f64(at.lat));
    let _ = Reflect::set(&obj, &JsValue::from_str("lng"), &JsValue::from_f64(at.lng));
    obj.into()
}

/// Read a `google.maps.LatLng`, whose `lat`/`lng` are methods.
fn read_lat_lng(value: &JsValue) -> Option<Coordinate> {
    let call = |name: &str| -> Option<f64> {
        let method: Function = Reflect::get(value, &JsValue::from_str(name)).ok()?.dyn_into().ok()?;
        method.call0(value).ok()?.as_f64()
    };
    Some(Coordinate::new(call("lat")?, call("lng")?))
}

/// `response.results[0].geometry.location`
fn first_result_location(response: &JsValue) -> Option<Coordinate> {
    let results = Reflect::get(response, &JsValue::from_str("results")).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let geometry = Reflect::get(&first, &JsValue::from_str("geometry")).ok()?;
    let location = Reflect::get(&geometry, &JsValue::from_str("location")).ok()?;
    read_lat_lng(&location)
}
